//! Login screen utility functions
//!
//! Contains helper functions used across login components

use crate::events::Worker;
use ratatui::prelude::Color;

/// The accent color used for a worker's log lines
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Authenticator => Color::Cyan,
    }
}

/// Shorten an event timestamp for the narrow log panel
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Reduce "YYYY-MM-DD HH:MM:SS" to "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fall back to the original timestamp if parsing fails
    timestamp.to_string()
}
