//! Activity log panel

use super::super::state::LoginState;
use super::super::utils::{format_compact_timestamp, get_worker_color};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the panel listing recent sign-in activity, newest first.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &LoginState) {
    // Borders plus padding eat three rows of the panel height
    let visible_rows = (area.height.saturating_sub(3)).max(1) as usize;

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(visible_rows)
        .map(event_line)
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("No sign-in attempts yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    // Long messages wrap rather than truncate
    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}

fn event_line(event: &Event) -> Line<'_> {
    let status_icon = match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Warn) => "",
        (EventType::Error, _) => "❌",
        (EventType::StateChange, _) => "", // filtered out by should_display
    };

    Line::from(vec![
        Span::raw(format!("{} ", status_icon)),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            event.msg.clone(),
            Style::default().fg(get_worker_color(&event.worker)),
        ),
    ])
}
