//! Login header component
//!
//! Renders the title and sign-in progress gauge

use super::super::state::LoginState;
use crate::events::AuthState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title and submit flow progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &LoginState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section with version and environment
    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("PORTAL SIGN-IN v{} ({})", version, state.environment);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an in-flight submit takes priority over form readiness
    let (progress_text, gauge_color, progress_percent) = match state.current_auth_state() {
        AuthState::Authenticating => {
            // Animated gauge - loops every 20 ticks for smooth animation
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "SIGNING IN - Contacting authentication service (simulated)".to_string(),
                Color::LightGreen,
                progress,
            )
        }
        AuthState::Idle => {
            // Each valid field fills half the bar
            let mut progress = 0u16;
            if state.form.email_valid() {
                progress += 50;
            }
            if state.form.password_valid() {
                progress += 50;
            }
            let display_text = if progress == 100 {
                "READY - Press Enter to sign in".to_string()
            } else {
                "WAITING - Enter email and password".to_string()
            };
            (display_text, Color::LightBlue, progress)
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
