//! Runtime wiring for the authentication worker

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, SUBMIT_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event;
use crate::form::Credentials;
use crate::workers::authenticator::Authenticator;
use crate::workers::core::EventSender;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the authentication worker and hand back its channel endpoints
pub async fn start_auth_worker(
    environment: Environment,
    shutdown: broadcast::Receiver<()>,
) -> (
    mpsc::Sender<Credentials>,
    mpsc::Receiver<Event>,
    Vec<JoinHandle<()>>,
) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (submit_sender, submit_receiver) = mpsc::channel::<Credentials>(SUBMIT_QUEUE_SIZE);

    let worker = Authenticator::new(environment, EventSender::new(event_sender));
    let join_handles = worker.run(submit_receiver, shutdown).await;

    (submit_sender, event_receiver, join_handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{AuthState, EventType};

    #[tokio::test(start_paused = true)]
    /// A queued submission flows through the wired worker end to end.
    async fn wired_worker_round_trip() {
        let (shutdown_sender, _) = broadcast::channel(1);
        let (submit_sender, mut event_receiver, join_handles) =
            start_auth_worker(Environment::Local, shutdown_sender.subscribe()).await;

        submit_sender
            .send(Credentials {
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        // Drain until the flow returns to idle
        loop {
            let event = event_receiver.recv().await.unwrap();
            if event.event_type == EventType::StateChange
                && event.auth_state == Some(AuthState::Idle)
            {
                break;
            }
        }

        let _ = shutdown_sender.send(());
        for handle in join_handles {
            handle.await.unwrap();
        }
    }
}
