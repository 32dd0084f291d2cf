//! Emergency type breakdown per district

use super::super::utils::striped_table;
use crate::sos::DistrictSummary;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::Cell;

pub const HEADERS: [&str; 7] = [
    "District",
    "Trapped",
    "Food/Water",
    "Medical",
    "Rescue",
    "Missing",
    "Other",
];

pub fn emergency_row(summary: &DistrictSummary) -> [String; 7] {
    [
        summary.district.clone(),
        summary.trapped.to_string(),
        summary.food_water.to_string(),
        summary.medical.to_string(),
        summary.rescue_assistance.to_string(),
        summary.missing_person.to_string(),
        summary.other.to_string(),
    ]
}

pub fn render_emergency_table(f: &mut Frame, area: Rect, summaries: &[DistrictSummary]) {
    let rows = summaries
        .iter()
        .map(|summary| emergency_row(summary).into_iter().map(Cell::from).collect())
        .collect();

    let mut widths = vec![Constraint::Min(16)];
    widths.extend([Constraint::Length(12); 6]);

    f.render_widget(striped_table("Emergency Types", &HEADERS, rows, widths), area);
}
