//! Vulnerable group counts per district

use super::super::utils::striped_table;
use crate::sos::DistrictSummary;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::Cell;

pub const HEADERS: [&str; 6] = [
    "District",
    "Total",
    "With Children",
    "With Elderly",
    "With Disabled",
    "Medical Emergency",
];

pub fn vulnerable_row(summary: &DistrictSummary) -> [String; 6] {
    [
        summary.district.clone(),
        summary.total.to_string(),
        summary.has_children.to_string(),
        summary.has_elderly.to_string(),
        summary.has_disabled.to_string(),
        summary.has_medical_emergency.to_string(),
    ]
}

pub fn render_vulnerable_table(f: &mut Frame, area: Rect, summaries: &[DistrictSummary]) {
    let rows = summaries
        .iter()
        .map(|summary| vulnerable_row(summary).into_iter().map(Cell::from).collect())
        .collect();

    let widths = vec![
        Constraint::Min(16),
        Constraint::Length(7),
        Constraint::Length(14),
        Constraint::Length(13),
        Constraint::Length(14),
        Constraint::Length(18),
    ];

    f.render_widget(striped_table("Vulnerable Groups", &HEADERS, rows, widths), area);
}

#[cfg(test)]
mod tests {
    use super::super::{kerala_x, render_to_text};
    use super::*;

    #[test]
    fn test_vulnerable_row() {
        let mut summary = kerala_x();
        summary.has_children = 4;
        summary.has_medical_emergency = 1;
        assert_eq!(
            vulnerable_row(&summary),
            ["Kerala-X", "10", "4", "0", "0", "1"].map(String::from)
        );
    }

    #[test]
    fn test_rows_follow_input_order() {
        let rows = [
            DistrictSummary { district: "B".into(), ..Default::default() },
            DistrictSummary { district: "A".into(), ..Default::default() },
        ];
        let text = render_to_text(100, 6, |f, area| render_vulnerable_table(f, area, &rows));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].trim_start_matches(['│', ' ']).starts_with('B'));
        assert!(lines[3].trim_start_matches(['│', ' ']).starts_with('A'));
    }
}
