//! Authentication worker that simulates the sign-in round trip

use super::core::EventSender;
use crate::consts::cli_consts::auth;
use crate::environment::Environment;
use crate::events::{AuthState, Event, EventType};
use crate::form::Credentials;
use crate::logging::LogLevel;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Worker that receives submitted credentials and simulates authentication
pub struct Authenticator {
    environment: Environment,
    event_sender: EventSender,
}

impl Authenticator {
    pub fn new(environment: Environment, event_sender: EventSender) -> Self {
        Self {
            environment,
            event_sender,
        }
    }

    /// Spawn the worker loop and return its handle.
    ///
    /// The loop ends on the shutdown broadcast or when the submission
    /// channel closes.
    pub async fn run(
        self,
        mut submissions: mpsc::Receiver<Credentials>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Vec<JoinHandle<()>> {
        let mut join_handles = Vec::new();

        let worker_handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    submission = submissions.recv() => match submission {
                        Some(credentials) => self.handle_submission(credentials),
                        None => break,
                    },
                }
            }
        });
        join_handles.push(worker_handle);

        join_handles
    }

    /// Run one simulated sign-in attempt on its own timer task.
    ///
    /// Each submission gets a detached task so overlapping attempts each keep
    /// their own delay, matching one deferred callback per submit.
    fn handle_submission(&self, credentials: Credentials) {
        let events = self.event_sender.clone();
        let environment = self.environment;

        tokio::spawn(async move {
            events
                .send_event(Event::state_change(
                    AuthState::Authenticating,
                    format!(
                        "Signing in as {} ({} environment)",
                        credentials.email, environment
                    ),
                ))
                .await;

            // TODO: Replace the simulated delay with a real credential check
            // once the authentication service API exists.
            tokio::time::sleep(auth::simulated_latency()).await;

            events
                .send_auth_event(
                    format!("Sign-in simulation complete for {}", credentials.email),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;

            // The submitted output, kept at debug level so default output
            // never carries the raw field values
            if let Ok(payload) = serde_json::to_string(&credentials) {
                events
                    .send_auth_event(
                        format!("Login data: {}", payload),
                        EventType::Success,
                        LogLevel::Debug,
                    )
                    .await;
            }

            events
                .send_event(Event::state_change(
                    AuthState::Idle,
                    "Ready to sign in".to_string(),
                ))
                .await;
        });
    }
}
