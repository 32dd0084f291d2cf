//! District status and priority table

use super::super::utils::{priority_color, striped_table};
use crate::format::group_thousands_u64;
use crate::sos::DistrictSummary;
use crate::sos::category::Priority;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::Style;
use ratatui::widgets::Cell;

pub const HEADERS: [&str; 12] = [
    "District",
    "Total",
    "People",
    "Pending",
    "Verified",
    "Rescued",
    "No Contact",
    "Missing",
    "Critical",
    "High",
    "Medium",
    "Low",
];

/// Priority tier of each column, for colouring.
const COLUMN_PRIORITY: [Option<Priority>; 12] = [
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(Priority::Critical),
    Some(Priority::High),
    Some(Priority::Medium),
    Some(Priority::Low),
];

/// Cell text of one row. Only the people count is grouped.
pub fn district_row(summary: &DistrictSummary) -> [String; 12] {
    [
        summary.district.clone(),
        summary.total.to_string(),
        group_thousands_u64(summary.total_people),
        summary.pending.to_string(),
        summary.verified.to_string(),
        summary.rescued.to_string(),
        summary.cannot_contact.to_string(),
        summary.missing.to_string(),
        summary.critical.to_string(),
        summary.high.to_string(),
        summary.medium.to_string(),
        summary.low.to_string(),
    ]
}

/// One row per summary, in the order given.
pub fn render_district_table(f: &mut Frame, area: Rect, summaries: &[DistrictSummary]) {
    let rows = summaries
        .iter()
        .map(|summary| {
            district_row(summary)
                .into_iter()
                .zip(COLUMN_PRIORITY)
                .map(|(text, priority)| match priority {
                    Some(priority) => Cell::from(text).style(Style::default().fg(priority_color(priority))),
                    None => Cell::from(text),
                })
                .collect()
        })
        .collect();

    let mut widths = vec![Constraint::Min(16), Constraint::Length(7), Constraint::Length(10)];
    widths.extend([Constraint::Length(10); 9]);

    f.render_widget(striped_table("District Status", &HEADERS, rows, widths), area);
}
