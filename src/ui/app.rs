//! Top-level UI state and the render/input loop

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::form::Credentials;
use crate::ui::login::{LoginState, render_login};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// Which screen the client is showing.
#[derive(Debug)]
pub enum Screen {
    /// Startup logo, shown briefly before the form.
    Splash,
    /// The sign-in form where users enter their credentials.
    Login(Box<LoginState>),
}

/// Everything the UI loop owns: the active screen plus channel endpoints.
#[derive(Debug)]
pub struct App {
    /// The environment presented in the header.
    environment: Environment,

    /// The screen currently on display.
    current_screen: Screen,

    /// Receives events from the authentication worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Queues credential submissions for the authentication worker.
    submit_sender: mpsc::Sender<Credentials>,

    /// Signals the worker tasks to stop when the user quits.
    shutdown_sender: broadcast::Sender<()>,

    /// Whether to enable background colors
    with_background_color: bool,
}

impl App {
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        submit_sender: mpsc::Sender<Credentials>,
        shutdown_sender: broadcast::Sender<()>,
        with_background_color: bool,
    ) -> Self {
        Self {
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            submit_sender,
            shutdown_sender,
            with_background_color,
        }
    }

    /// Builds the login screen state and switches to it.
    fn enter_login(&mut self) {
        let state = LoginState::new(self.environment, self.with_background_color);
        self.current_screen = Screen::Login(Box::new(state));
    }
}

/// Drive the render/input loop until the user quits.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        // Drain worker events into the login screen's queue
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Login(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        if let Screen::Login(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // The splash advances to the form on its own after the delay
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_login();
                continue;
            }
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events. 'q' stays usable for typing, so only
                // Esc and Ctrl+C quit.
                if key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    // Any key skips the splash
                    Screen::Splash => app.enter_login(),
                    Screen::Login(state) => match key.code {
                        KeyCode::Tab => state.focus_next(),
                        KeyCode::BackTab => state.focus_previous(),
                        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            state.toggle_password_visibility();
                        }
                        KeyCode::Enter => dispatch_submit(state, &app.submit_sender),
                        _ => state.handle_input(key),
                    },
                }
            }
        }
    }
}

/// Validate, flip the loading state, and hand the credentials to the worker.
///
/// The send is non-blocking so the UI loop never stalls. When the queue is
/// full or the worker is gone, the submit is rolled back so the gauge does
/// not spin forever waiting for a completion that cannot arrive.
fn dispatch_submit(state: &mut LoginState, submit_sender: &mpsc::Sender<Credentials>) {
    let Some(credentials) = state.submit() else {
        return;
    };

    if submit_sender.try_send(credentials).is_err() {
        state.record_dispatch_failure();
    }
}

fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Login(state) => render_login(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;

    fn filled_state() -> LoginState {
        let mut state = LoginState::new(Environment::Local, true);
        state.form.set_email("a@b.com");
        state.form.set_password("secret1");
        state
    }

    #[test]
    /// A valid submit lands the credential snapshot on the worker queue.
    fn dispatch_sends_credentials_to_worker() {
        let (sender, mut receiver) = mpsc::channel(1);
        let mut state = filled_state();

        dispatch_submit(&mut state, &sender);

        assert!(state.is_loading);
        let sent = receiver.try_recv().expect("credentials queued");
        assert_eq!(sent.email, "a@b.com");
        assert_eq!(sent.password, "secret1");
    }

    #[test]
    /// An invalid form never reaches the worker queue.
    fn dispatch_on_invalid_form_sends_nothing() {
        let (sender, mut receiver) = mpsc::channel(1);
        let mut state = LoginState::new(Environment::Local, true);

        dispatch_submit(&mut state, &sender);

        assert!(!state.is_loading);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    /// A full worker queue rolls the submit back instead of wedging the UI.
    fn dispatch_failure_rolls_back_loading() {
        let (sender, _receiver) = mpsc::channel(1);
        let mut state = filled_state();

        // Fill the queue so the next send fails
        sender
            .try_send(Credentials {
                email: "x@y.com".to_string(),
                password: "hunter22".to_string(),
            })
            .unwrap();

        dispatch_submit(&mut state, &sender);

        assert!(!state.is_loading);
        assert_eq!(
            state.pending_events.back().map(|e| e.event_type),
            Some(EventType::Error)
        );
    }
}
