//! Session wiring shared by the TUI and headless modes.

use crate::environment::Environment;
use crate::events::Event;
use crate::form::Credentials;
use crate::runtime::start_auth_worker;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Channel endpoints and worker handles for one run of the client.
#[derive(Debug)]
pub struct SessionData {
    /// Sends validated credentials to the authentication worker
    pub submit_sender: mpsc::Sender<Credentials>,
    /// Receives progress events from the worker
    pub event_receiver: mpsc::Receiver<Event>,
    /// Worker task handles, joined on shutdown
    pub join_handles: Vec<JoinHandle<()>>,
    /// Broadcasts the shutdown signal to workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// The environment this session runs in
    pub environment: Environment,
}

/// Create the shutdown channel, start the authentication worker, and return
/// the session handles for mode-specific handling.
pub async fn setup_session(environment: Environment) -> SessionData {
    let (shutdown_sender, _) = broadcast::channel(1);

    let (submit_sender, event_receiver, join_handles) =
        start_auth_worker(environment, shutdown_sender.subscribe()).await;

    SessionData {
        submit_sender,
        event_receiver,
        join_handles,
        shutdown_sender,
        environment,
    }
}
