//! District aggregation
//!
//! Turns raw feed records into per-district summaries and the figures the
//! stat cards show. This is the boundary where summary consistency is checked.

use super::category::{EmergencyType, Priority, Status};
use super::summary::{DistrictSummary, SummaryError};
use super::types::{ApiStats, SosRecord};
use crate::consts::cli_consts::{TOTAL_ROW_LABEL, UNKNOWN_DISTRICT};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// Groups records by district, one zero-filled summary per distinct district,
/// sorted by district name.
pub fn summarize_districts(records: &[SosRecord]) -> Vec<DistrictSummary> {
    let mut by_district: BTreeMap<String, DistrictSummary> = BTreeMap::new();
    for record in records {
        let name = district_name(record);
        by_district
            .entry(name.to_string())
            .or_insert_with(|| DistrictSummary::new(name))
            .add_record(record);
    }
    by_district.into_values().collect()
}

/// Trimmed district name; blank districts are grouped under "Unknown".
pub fn district_name(record: &SosRecord) -> &str {
    let name = record.district.trim();
    if name.is_empty() {
        UNKNOWN_DISTRICT
    } else {
        name
    }
}

/// Sum of all rows, labelled `TOTAL`.
pub fn totals_row(summaries: &[DistrictSummary]) -> DistrictSummary {
    let mut total = DistrictSummary::new(TOTAL_ROW_LABEL);
    for summary in summaries {
        total.accumulate(summary);
    }
    total
}

/// Busiest districts first; ties keep name order.
pub fn sort_by_total_desc(summaries: &mut [DistrictSummary]) {
    summaries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.district.cmp(&b.district)));
}

/// Every consistency violation across the given rows.
pub fn validate_all(summaries: &[DistrictSummary]) -> Vec<SummaryError> {
    summaries
        .iter()
        .filter_map(|summary| summary.validate().err())
        .collect()
}

/// Feed-style stats computed locally, for sources that do not provide them.
///
/// Keys of `by_status`/`by_priority` are the upper-cased raw values, blank
/// values are keyed `UNKNOWN`. `missing_people_count` counts missing-person
/// reports.
pub fn stats_from_records(records: &[SosRecord]) -> ApiStats {
    let mut stats = ApiStats::default();
    for record in records {
        stats.total_people += u64::from(record.number_of_people);
        if EmergencyType::classify(&record.emergency_type) == EmergencyType::MissingPerson {
            stats.missing_people_count += 1;
        }
        *stats.by_status.entry(stat_key(&record.status)).or_insert(0) += 1;
        *stats
            .by_priority
            .entry(stat_key(&record.priority))
            .or_insert(0) += 1;
    }
    stats
}

fn stat_key(raw: &str) -> String {
    let key = raw.trim().to_uppercase();
    if key.is_empty() {
        "UNKNOWN".to_string()
    } else {
        key
    }
}

/// Records whose priority classifies as critical, in feed order.
pub fn critical_cases(records: &[SosRecord]) -> Vec<&SosRecord> {
    records
        .iter()
        .filter(|record| Priority::classify(&record.priority) == Priority::Critical)
        .collect()
}

/// The eight headline figures shown on the stat cards.
///
/// Signed so that whatever a feed reports, negative values included, is shown as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatTotals {
    pub total_cases: i64,
    pub total_people: i64,
    pub critical: i64,
    pub pending: i64,
    pub rescued: i64,
    pub missing: i64,
    pub cannot_contact: i64,
    pub verified: i64,
}

impl StatTotals {
    /// Figures from feed stats, with status/priority keys matched case-insensitively.
    pub fn from_stats(stats: &ApiStats, total_count: u64) -> Self {
        let status = |wanted: Status| -> i64 {
            sum_matching(&stats.by_status, |key| Status::classify(key) == wanted)
        };
        let critical = sum_matching(&stats.by_priority, |key| {
            Priority::classify(key) == Priority::Critical
        });
        Self {
            total_cases: to_signed(total_count),
            total_people: to_signed(stats.total_people),
            critical,
            pending: status(Status::Pending),
            rescued: status(Status::Rescued),
            missing: to_signed(stats.missing_people_count),
            cannot_contact: status(Status::CannotContact),
            verified: status(Status::Verified),
        }
    }

    /// Figures derived from aggregated rows when the feed sent no stats.
    pub fn from_summaries(summaries: &[DistrictSummary]) -> Self {
        let total = totals_row(summaries);
        Self {
            total_cases: to_signed(total.total),
            total_people: to_signed(total.total_people),
            critical: to_signed(total.critical),
            pending: to_signed(total.pending),
            rescued: to_signed(total.rescued),
            missing: to_signed(total.missing_person),
            cannot_contact: to_signed(total.cannot_contact),
            verified: to_signed(total.verified),
        }
    }
}

fn sum_matching(counts: &BTreeMap<String, u64>, matches: impl Fn(&str) -> bool) -> i64 {
    to_signed(
        counts
            .iter()
            .filter(|(key, _)| matches(key.as_str()))
            .map(|(_, count)| *count)
            .sum(),
    )
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// One complete fetch-and-aggregate result, as handed to the renderers.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// District rows in name order.
    pub summaries: Vec<DistrictSummary>,
    /// The headline figures.
    pub totals: StatTotals,
    /// Records actually fetched.
    pub record_count: usize,
    /// False when paging stopped early.
    pub complete: bool,
    /// Summaries that failed validation.
    pub inconsistencies: Vec<SummaryError>,
    pub fetched_at: DateTime<Local>,
}

impl Snapshot {
    /// Aggregates `records`, preferring feed stats for the headline figures.
    pub fn build(
        records: &[SosRecord],
        stats: Option<ApiStats>,
        total_count: u64,
        complete: bool,
    ) -> Self {
        let summaries = summarize_districts(records);
        let inconsistencies = validate_all(&summaries);
        for problem in &inconsistencies {
            log::warn!("Inconsistent district summary: {}", problem);
        }
        let totals = match &stats {
            Some(stats) => StatTotals::from_stats(stats, total_count),
            None => StatTotals::from_summaries(&summaries),
        };
        Self {
            summaries,
            totals,
            record_count: records.len(),
            complete,
            inconsistencies,
            fetched_at: Local::now(),
        }
    }
}
