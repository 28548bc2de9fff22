//! Shared worker plumbing

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Cloneable handle for emitting events toward the UI.
///
/// Sends are best-effort: once the UI side hangs up there is nobody left to
/// show the event to, so failures are dropped.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    /// Emit an authenticator event with the given type and level.
    pub async fn send_auth_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::authenticator_with_level(
            message, event_type, log_level,
        ))
        .await;
    }
}
