//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::sos::category::Priority;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Fetcher => Color::Cyan,
        Worker::Aggregator => Color::Green,
    }
}

/// Severity colour of a priority tier.
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Critical => Color::Red,
        Priority::High => Color::LightRed,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
        Priority::Unknown => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" becomes "MM-DD HH:MM"
    let Some((date_part, time_part)) = timestamp.split_once(' ') else {
        return timestamp.to_string();
    };
    match (date_part.get(5..10), time_part.get(0..5)) {
        (Some(month_day), Some(hour_min)) => format!("{} {}", month_day, hour_min),
        _ => timestamp.to_string(),
    }
}

/// Shorten transport errors to something that fits on one log line
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("operation timed out") || msg.contains("TimedOut") {
        return "Request timed out".to_string();
    }
    if msg.contains("error sending request") {
        return "Network error: could not reach the SOS feed".to_string();
    }
    msg.to_string()
}

/// Data table with a bold header and alternating row background.
pub fn striped_table<'a>(
    title: &'a str,
    headers: &[&'a str],
    rows: Vec<Vec<Cell<'a>>>,
    widths: Vec<Constraint>,
) -> Table<'a> {
    let header = Row::new(headers.iter().map(|h| Cell::from(*h)).collect::<Vec<_>>()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = rows
        .into_iter()
        .enumerate()
        .map(|(i, cells)| {
            let row = Row::new(cells);
            if i % 2 == 1 {
                row.style(Style::default().bg(Color::Rgb(28, 32, 40)))
            } else {
                row
            }
        })
        .collect();

    Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_timestamp_drops_year_and_seconds() {
        assert_eq!(format_compact_timestamp("2024-08-01 09:05:03"), "08-01 09:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_priority_tiers_have_distinct_colors() {
        let colors = [
            priority_color(Priority::Critical),
            priority_color(Priority::High),
            priority_color(Priority::Medium),
            priority_color(Priority::Low),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(priority_color(Priority::Critical), Color::Red);
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message("Refresh failed: error sending request for url"),
            "Network error: could not reach the SOS feed"
        );
        assert_eq!(clean_http_error_message("HTTP 404"), "HTTP 404");
    }
}
