//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod district_table;
pub mod emergency_table;
pub mod footer;
pub mod header;
pub mod logs;
pub mod stats_cards;
pub mod vulnerable_table;

#[cfg(test)]
pub(crate) fn render_to_text(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut ratatui::Frame, ratatui::layout::Rect),
) -> String {
    use ratatui::{Terminal, backend::TestBackend};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            draw(f, area)
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) fn kerala_x() -> crate::sos::DistrictSummary {
    crate::sos::DistrictSummary {
        district: "Kerala-X".to_string(),
        total: 10,
        total_people: 40,
        pending: 5,
        verified: 2,
        rescued: 2,
        missing: 1,
        cannot_contact: 0,
        critical: 2,
        high: 3,
        medium: 4,
        low: 1,
        trapped: 1,
        food_water: 2,
        medical: 1,
        rescue_assistance: 3,
        missing_person: 1,
        other: 2,
        ..Default::default()
    }
}
