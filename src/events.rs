//! Worker progress events and their display filtering

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that simulates the authentication round trip for submitted
    /// credentials.
    Authenticator,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    StateChange,
}

/// Represents the current state of the submit flow
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum AuthState {
    /// A submission is in flight (the loading window)
    Authenticating,
    /// No submission in flight
    Idle,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Submit flow state, carried only by state change events
    pub auth_state: Option<AuthState>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            auth_state: None,
        }
    }

    pub fn state_change(state: AuthState, msg: String) -> Self {
        Self {
            worker: Worker::Authenticator,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type: EventType::StateChange,
            log_level: LogLevel::Info,
            auth_state: Some(state),
        }
    }

    pub fn authenticator_with_level(
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Worker::Authenticator, msg, event_type, log_level)
    }

    /// Whether the event clears the level threshold from `RUST_LOG`.
    ///
    /// Events below info level stay hidden unless the environment asks for
    /// them; the debug-level submitted-output record depends on this.
    pub fn should_log(&self) -> bool {
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Whether the event belongs in the activity log panel.
    ///
    /// State changes drive the status gauge instead of the log, so they are
    /// excluded here regardless of level.
    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::StateChange {
            return false;
        }
        self.should_log()
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
