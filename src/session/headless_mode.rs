//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::AuthState;
use crate::form::Credentials;
use crate::print_cmd_info;
use std::error::Error;

/// Run one sign-in attempt without the TUI: queue the already-validated
/// credentials, print worker events to stdout, and exit when the submit flow
/// returns to idle or on Ctrl+C.
pub async fn run_headless_mode(
    mut session: SessionData,
    credentials: Credentials,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.environment);
    print_cmd_info!(
        "Simulation target",
        "{} (no request is actually sent)",
        session.environment.portal_url()
    );

    // Ctrl+C folds into the same shutdown path the TUI uses
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Queue the single sign-in attempt
    if session.submit_sender.send(credentials).await.is_err() {
        return Err(Box::from("authentication worker is not running"));
    }

    // Event loop: log events to console until the attempt finishes
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_log() {
                    println!("{}", event);
                }
                if event.auth_state == Some(AuthState::Idle) {
                    break;
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    // Stop the worker and wait for it to finish
    let _ = session.shutdown_sender.send(());
    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
