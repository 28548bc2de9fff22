//! Console messages printed around session start and shutdown.

use crate::environment::Environment;

const COLOR_INFO: &str = "\x1b[1;36m"; // bold cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // bold green
const COLOR_RESET: &str = "\x1b[0m";

/// A lifecycle message, tagged by outcome.
#[derive(Debug, Clone)]
pub enum SessionMessage {
    Info(String),
    Success(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn print(&self) {
        let (color, tag, msg) = match self {
            Self::Info(msg) => (COLOR_INFO, "INFO", msg),
            Self::Success(msg) => (COLOR_SUCCESS, "SUCCESS", msg),
        };
        println!("{}[{}]{} {}", color, tag, COLOR_RESET, msg);
    }
}

pub fn print_session_starting(mode: &str, environment: Environment) {
    SessionMessage::info(format!(
        "Starting {} mode in the {} environment",
        mode, environment
    ))
    .print();
}

pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

pub fn print_session_exit_success() {
    SessionMessage::success("Portal CLI exited successfully").print();
}
