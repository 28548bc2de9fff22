//! Login form component
//!
//! Renders the email and password fields with validation hints

use super::super::state::{FocusField, LoginState};
use crate::validation::ValidationError;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Width of the centered form column
const FORM_WIDTH: u16 = 50;

/// Render the centered sign-in form.
pub fn render_form(f: &mut Frame, area: Rect, state: &LoginState) {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(FORM_WIDTH),
            Constraint::Fill(1),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(horizontal[1]);

    render_email_field(f, rows[1], state);
    render_hint(f, rows[2], state.email_touched(), state.form.email_error());
    render_password_field(f, rows[3], state);
    render_hint(
        f,
        rows[4],
        state.password_touched(),
        state.form.password_error(),
    );
    render_error_banner(f, rows[5], state);
}

fn render_email_field(f: &mut Frame, area: Rect, state: &LoginState) {
    let focused = state.focus == FocusField::Email;
    let width = area.width.max(3) - 3;
    let scroll = state.email_input().visual_scroll(width as usize);

    let input = Paragraph::new(state.email_input().value())
        .scroll((0, scroll as u16))
        .block(field_block("Email", focused));
    f.render_widget(input, area);

    if focused {
        set_field_cursor(f, area, state.email_input().visual_cursor(), scroll);
    }
}

fn render_password_field(f: &mut Frame, area: Rect, state: &LoginState) {
    let focused = state.focus == FocusField::Password;
    let width = area.width.max(3) - 3;
    let scroll = state.password_input().visual_scroll(width as usize);

    // Mask every character unless visibility is toggled on
    let display_value: String = if state.show_password {
        state.password_input().value().to_string()
    } else {
        state.password_input().value().chars().map(|_| '•').collect()
    };

    let title = if state.show_password {
        "Password (visible)"
    } else {
        "Password"
    };

    let input = Paragraph::new(display_value)
        .scroll((0, scroll as u16))
        .block(field_block(title, focused));
    f.render_widget(input, area);

    if focused {
        set_field_cursor(f, area, state.password_input().visual_cursor(), scroll);
    }
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

/// Ratatui hides the cursor unless it's explicitly set. Position it past the
/// end of the visible text, inside the field border.
fn set_field_cursor(f: &mut Frame, area: Rect, visual_cursor: usize, scroll: usize) {
    let x = visual_cursor.max(scroll) - scroll + 1;
    f.set_cursor_position((area.x + x as u16, area.y + 1));
}

/// Show the field's validation hint once the user has started typing.
fn render_hint(f: &mut Frame, area: Rect, touched: bool, error: Option<ValidationError>) {
    if !touched {
        return;
    }
    if let Some(error) = error {
        let hint = Paragraph::new(error.to_string()).style(Style::default().fg(Color::LightRed));
        f.render_widget(hint, area);
    }
}

/// Authentication failures land here. Cleared at the start of every submit.
fn render_error_banner(f: &mut Frame, area: Rect, state: &LoginState) {
    if state.login_error.is_empty() {
        return;
    }
    let banner = Paragraph::new(state.login_error.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(banner, area);
}
