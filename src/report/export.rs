//! Multi-section JSON report

use super::ReportError;
use crate::api::FetchOutcome;
use crate::sos::aggregate::{critical_cases, stats_from_records, summarize_districts, totals_row};
use crate::sos::{ApiStats, DistrictSummary, SosRecord};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default file name, stamped with the generation time.
pub fn default_report_name(now: DateTime<Local>) -> String {
    format!("flood_support_report_{}.json", now.format("%Y%m%d_%H%M%S"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyTypeRow {
    pub district: String,
    pub trapped: u64,
    pub food_water: u64,
    pub dry_food: u64,
    pub medical: u64,
    pub rescue_assistance: u64,
    pub missing_person: u64,
    pub other: u64,
}

impl From<&DistrictSummary> for EmergencyTypeRow {
    fn from(summary: &DistrictSummary) -> Self {
        Self {
            district: summary.district.clone(),
            trapped: summary.trapped,
            food_water: summary.food_water,
            dry_food: summary.dry_food,
            medical: summary.medical,
            rescue_assistance: summary.rescue_assistance,
            missing_person: summary.missing_person,
            other: summary.other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerableGroupRow {
    pub district: String,
    pub total_cases: u64,
    pub with_children: u64,
    pub with_elderly: u64,
    pub with_disabled: u64,
    pub medical_emergency: u64,
}

impl From<&DistrictSummary> for VulnerableGroupRow {
    fn from(summary: &DistrictSummary) -> Self {
        Self {
            district: summary.district.clone(),
            total_cases: summary.total,
            with_children: summary.has_children,
            with_elderly: summary.has_elderly,
            with_disabled: summary.has_disabled,
            medical_emergency: summary.has_medical_emergency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_cases: u64,
    pub total_people_affected: u64,
    pub missing_people_count: u64,
    pub by_status: BTreeMap<String, u64>,
    pub by_priority: BTreeMap<String, u64>,
    /// Whether the figures came from the feed or were computed from the records.
    pub from_feed: bool,
}

impl OverallStats {
    fn new(stats: ApiStats, total_cases: u64, from_feed: bool) -> Self {
        Self {
            total_cases,
            total_people_affected: stats.total_people,
            missing_people_count: stats.missing_people_count,
            by_status: stats.by_status,
            by_priority: stats.by_priority,
            from_feed,
        }
    }
}

/// Everything written to a report file. Table sections end with a TOTAL row.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(rename = "Generated At")]
    pub generated_at: String,
    #[serde(rename = "Source")]
    pub source: String,
    /// False when some pages could not be fetched.
    #[serde(rename = "Complete")]
    pub complete: bool,
    #[serde(rename = "District Summary")]
    pub district_summary: Vec<DistrictSummary>,
    #[serde(rename = "Emergency Types")]
    pub emergency_types: Vec<EmergencyTypeRow>,
    #[serde(rename = "Vulnerable Groups")]
    pub vulnerable_groups: Vec<VulnerableGroupRow>,
    #[serde(rename = "Overall Stats")]
    pub overall_stats: OverallStats,
    #[serde(rename = "Critical Cases")]
    pub critical_cases: Vec<&'a SosRecord>,
    #[serde(rename = "All Records")]
    pub all_records: &'a [SosRecord],
}

impl<'a> Report<'a> {
    pub fn build(outcome: &'a FetchOutcome, source: String, generated_at: DateTime<Local>) -> Self {
        let mut district_summary = summarize_districts(&outcome.records);
        let total = totals_row(&district_summary);

        let mut emergency_types: Vec<EmergencyTypeRow> =
            district_summary.iter().map(EmergencyTypeRow::from).collect();
        emergency_types.push(EmergencyTypeRow::from(&total));

        let mut vulnerable_groups: Vec<VulnerableGroupRow> =
            district_summary.iter().map(VulnerableGroupRow::from).collect();
        vulnerable_groups.push(VulnerableGroupRow::from(&total));

        district_summary.push(total);

        let overall_stats = match &outcome.stats {
            Some(stats) => OverallStats::new(stats.clone(), outcome.total_count, true),
            None => OverallStats::new(
                stats_from_records(&outcome.records),
                outcome.records.len() as u64,
                false,
            ),
        };

        Self {
            generated_at: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            source,
            complete: outcome.complete,
            district_summary,
            emergency_types,
            vulnerable_groups,
            overall_stats,
            critical_cases: critical_cases(&outcome.records),
            all_records: &outcome.records,
        }
    }

    /// Writes the report as pretty-printed JSON, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
