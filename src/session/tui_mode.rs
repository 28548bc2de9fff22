//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    error::Error,
    io::{self, Stdout},
};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive sign-in screen until the user quits, then restore the
/// terminal and join the workers.
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", session.environment);

    let mut terminal = setup_terminal()?;

    let app = ui::App::new(
        session.environment,
        session.event_receiver,
        session.submit_sender.clone(),
        session.shutdown_sender.clone(),
        with_background,
    );

    let result = ui::run(&mut terminal, app).await;

    // Restore the terminal before surfacing any UI error, or the shell is
    // left in raw mode.
    restore_terminal(&mut terminal)?;
    result?;

    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}
