//! Dashboard header component
//!
//! Renders the title and the data source line

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Status line under the title.
pub fn source_line(state: &DashboardState) -> String {
    match &state.snapshot {
        Some(snapshot) => format!(
            "Source: {} | Last refresh: {} | {} records{} | Auto refresh every {}s",
            state.source_label,
            snapshot.fetched_at.format("%H:%M:%S"),
            snapshot.record_count,
            if snapshot.complete { "" } else { " (incomplete)" },
            state.refresh_secs
        ),
        None => format!("Source: {} | Waiting for first refresh...", state.source_label),
    }
}

pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let title_text = format!("FLOOD SUPPORT SOS DASHBOARD v{}", env!("CARGO_PKG_VERSION"));
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let source_color = match &state.snapshot {
        Some(snapshot) if !snapshot.complete || !snapshot.inconsistencies.is_empty() => {
            Color::LightYellow
        }
        Some(_) => Color::Gray,
        None => Color::DarkGray,
    };
    let source = Paragraph::new(Line::from(Span::styled(
        source_line(state),
        Style::default().fg(source_color),
    )))
    .alignment(Alignment::Center);
    f.render_widget(source, header_chunks[1]);
}
