//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as WorkerEvent;
use crate::sos::aggregate::sort_by_total_desc;
use crate::sos::{DistrictSummary, Snapshot};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;

/// Which table the tabbed area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableTab {
    #[default]
    Districts,
    EmergencyTypes,
    VulnerableGroups,
}

impl TableTab {
    pub const ALL: [TableTab; 3] = [
        TableTab::Districts,
        TableTab::EmergencyTypes,
        TableTab::VulnerableGroups,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TableTab::Districts => "Districts",
            TableTab::EmergencyTypes => "Emergency Types",
            TableTab::VulnerableGroups => "Vulnerable Groups",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TableTab::Districts => 0,
            TableTab::EmergencyTypes => 1,
            TableTab::VulnerableGroups => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Dashboard state: the latest snapshot plus what the UI adds around it.
#[derive(Debug)]
pub struct DashboardState {
    /// Where records come from, for the header.
    pub source_label: String,
    /// Seconds between background refreshes.
    pub refresh_secs: u64,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Latest snapshot, if one has arrived.
    pub snapshot: Option<Snapshot>,
    /// The snapshot's district rows, busiest first.
    pub district_rows: Vec<DistrictSummary>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    pub active_tab: TableTab,
}

impl DashboardState {
    pub fn new(ui_config: &UIConfig) -> Self {
        Self {
            source_label: ui_config.source_label.clone(),
            refresh_secs: ui_config.refresh_secs,
            with_background_color: ui_config.with_background_color,
            snapshot: None,
            district_rows: Vec::new(),
            activity_logs: VecDeque::new(),
            active_tab: TableTab::default(),
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Replaces the displayed data wholesale.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        let mut rows = snapshot.summaries.clone();
        sort_by_total_desc(&mut rows);
        self.district_rows = rows;
        self.snapshot = Some(snapshot);
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }
}
