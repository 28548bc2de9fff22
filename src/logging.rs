use std::env;

/// Severity attached to every event, ordered from chattiest to most critical.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// The display threshold taken from `RUST_LOG`, defaulting to info.
pub fn get_rust_log_level() -> LogLevel {
    env::var("RUST_LOG")
        .map(|value| parse_rust_log_level(&value))
        .unwrap_or(LogLevel::Info)
}

/// Parse a `RUST_LOG` value into a single threshold.
///
/// A segment scoped to this crate (`portal_cli=debug`) wins over everything
/// else; otherwise the first bare level name applies. Segments scoped to
/// other crates and unrecognized names fall through to info.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let mut bare_level = None;
    for segment in rust_log.split(',') {
        match segment.split_once('=') {
            Some((target, level)) if target.trim() == "portal_cli" => {
                return LogLevel::from_name(level).unwrap_or(LogLevel::Info);
            }
            Some(_) => {}
            None => {
                if bare_level.is_none() {
                    bare_level = LogLevel::from_name(segment);
                }
            }
        }
    }
    bare_level.unwrap_or(LogLevel::Info)
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}
