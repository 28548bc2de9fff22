//! Login screen state update logic
//!
//! Contains all methods for updating login state from events

use super::state::LoginState;
use crate::events::{AuthState, Event as WorkerEvent, EventType};

impl LoginState {
    /// Advance one UI frame: bump the animation tick and absorb worker events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event.clone());
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state.
    ///
    /// Only submit flow transitions mutate the form state. Everything else is
    /// informational and lives in the activity log alone.
    fn process_event(&mut self, event: &WorkerEvent) {
        if event.event_type == EventType::StateChange {
            if let Some(state) = event.auth_state {
                self.is_loading = state == AuthState::Authenticating;
            }
        }
    }
}
