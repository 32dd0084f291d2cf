//! Headline stat cards
//!
//! Eight fixed-order tiles, each an icon, a grouped number and a label.

use super::super::utils::priority_color;
use crate::format::group_thousands;
use crate::sos::StatTotals;
use crate::sos::category::Priority;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: i64,
    pub color: Color,
}

/// The cards in display order. Values are passed through untouched.
pub fn stat_cards(totals: &StatTotals) -> [StatCard; 8] {
    let card = |icon, label, value, color| StatCard {
        icon,
        label,
        value,
        color,
    };
    [
        card("📋", "Total Cases", totals.total_cases, Color::Cyan),
        card("👥", "People Affected", totals.total_people, Color::LightBlue),
        card("🚨", "Critical", totals.critical, priority_color(Priority::Critical)),
        card("⏳", "Pending", totals.pending, Color::Yellow),
        card("✅", "Verified", totals.verified, Color::LightGreen),
        card("🛟", "Rescued", totals.rescued, Color::Green),
        card("🔍", "Missing", totals.missing, Color::Magenta),
        card("📵", "Cannot Contact", totals.cannot_contact, Color::Gray),
    ]
}

pub fn render_stats_cards(f: &mut Frame, area: Rect, totals: &StatTotals) {
    let cards = stat_cards(totals);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, cards.len() as u32); 8])
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                group_thousands(card.value),
                Style::default()
                    .fg(card.color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} {}", card.icon, card.label),
                Style::default().fg(Color::Gray),
            )),
        ];
        let tile = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(card.color)),
        );
        f.render_widget(tile, *chunk);
    }
}
