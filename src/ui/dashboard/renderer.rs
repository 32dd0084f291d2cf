//! Dashboard main renderer

use super::components::{
    district_table, emergency_table, footer, header, logs, stats_cards, vulnerable_table,
};
use super::state::{DashboardState, TableTab};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Tabs};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let totals = state
        .snapshot
        .as_ref()
        .map(|snapshot| snapshot.totals)
        .unwrap_or_default();
    stats_cards::render_stats_cards(f, main_chunks[1], &totals);

    render_table_area(f, main_chunks[2], state);
    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4]);
}

fn render_table_area(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    let titles: Vec<Line> = TableTab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
    let tabs = Tabs::new(titles)
        .select(state.active_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, chunks[0]);

    let rows = &state.district_rows;
    match state.active_tab {
        TableTab::Districts => district_table::render_district_table(f, chunks[1], rows),
        TableTab::EmergencyTypes => emergency_table::render_emergency_table(f, chunks[1], rows),
        TableTab::VulnerableGroups => {
            vulnerable_table::render_vulnerable_table(f, chunks[1], rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::components::render_to_text;
    use super::*;
    use crate::sos::{SosRecord, Snapshot};
    use crate::ui::app::UIConfig;

    fn record(district: &str, people: u32) -> SosRecord {
        SosRecord {
            district: district.to_string(),
            status: "PENDING".to_string(),
            priority: "HIGH".to_string(),
            emergency_type: "TRAPPED".to_string(),
            number_of_people: people,
            ..Default::default()
        }
    }

    fn state_with(records: &[SosRecord]) -> DashboardState {
        let mut state = DashboardState::new(&UIConfig::new(true, "File (dump.json)".to_string(), 300));
        state.apply_snapshot(Snapshot::build(records, None, records.len() as u64, true));
        state
    }

    #[test]
    fn test_full_dashboard_renders_busiest_district_first() {
        let records = [
            record("Alappuzha", 2),
            record("Kottayam", 1_234_000),
            record("Kottayam", 567),
        ];
        let state = state_with(&records);
        let text = render_to_text(170, 48, |f, _| render_dashboard(f, &state));

        assert!(text.contains("FLOOD SUPPORT SOS DASHBOARD"));
        assert!(text.contains("Source: File (dump.json)"));
        assert!(text.contains("1,234,569"));
        assert!(text.contains("Districts"));
        assert!(text.contains("[Q] Quit"));

        let kottayam = text.find("Kottayam").unwrap();
        let alappuzha = text.find("Alappuzha").unwrap();
        assert!(kottayam < alappuzha);
    }

    #[test]
    fn test_tab_switch_changes_table() {
        let mut state = state_with(&[record("Idukki", 3)]);
        state.next_tab();
        let text = render_to_text(170, 48, |f, _| render_dashboard(f, &state));
        assert!(text.contains("Food/Water"));
        assert!(!text.contains("No Contact"));
    }

    #[test]
    fn test_renders_before_first_snapshot() {
        let state = DashboardState::new(&UIConfig::new(false, "Local".to_string(), 60));
        let text = render_to_text(170, 48, |f, _| render_dashboard(f, &state));
        assert!(text.contains("Waiting for first refresh"));
        assert!(text.contains("Starting up..."));
    }
}
