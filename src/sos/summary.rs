//! Per-district counts.

use super::category::{EmergencyType, Priority, Status};
use super::types::SosRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pre-aggregated counts of SOS records for one district.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistrictSummary {
    pub district: String,
    pub total: u64,
    pub total_people: u64,

    pub pending: u64,
    pub verified: u64,
    pub acknowledged: u64,
    pub in_progress: u64,
    pub rescued: u64,
    pub completed: u64,
    pub cannot_contact: u64,
    pub missing: u64,

    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,

    pub trapped: u64,
    pub food_water: u64,
    pub medical: u64,
    pub rescue_assistance: u64,
    pub missing_person: u64,
    /// Dry rations only; not one of the dashboard columns.
    pub dry_food: u64,
    pub other: u64,

    pub has_children: u64,
    pub has_elderly: u64,
    pub has_disabled: u64,
    pub has_medical_emergency: u64,
}

/// A summary whose counts contradict each other.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("{district}: total {total} but per-status counts sum to {status_sum}")]
    StatusMismatch {
        district: String,
        total: u64,
        status_sum: u64,
    },

    #[error("{district}: {field} count {count} exceeds total {total}")]
    CountExceedsTotal {
        district: String,
        field: &'static str,
        count: u64,
        total: u64,
    },
}

impl DistrictSummary {
    /// Zero-filled summary for a district.
    pub fn new(district: impl Into<String>) -> Self {
        Self {
            district: district.into(),
            ..Default::default()
        }
    }

    /// Counts one record into the summary.
    pub fn add_record(&mut self, record: &SosRecord) {
        self.total += 1;
        self.total_people += u64::from(record.number_of_people);

        match Status::classify(&record.status) {
            Status::Pending => self.pending += 1,
            Status::Verified => self.verified += 1,
            Status::Acknowledged => self.acknowledged += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Rescued => self.rescued += 1,
            Status::Completed => self.completed += 1,
            Status::CannotContact => self.cannot_contact += 1,
            Status::Missing => self.missing += 1,
            Status::Unknown => {}
        }

        match Priority::classify(&record.priority) {
            Priority::Critical => self.critical += 1,
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
            Priority::Unknown => {}
        }

        match EmergencyType::classify(&record.emergency_type) {
            EmergencyType::Trapped => self.trapped += 1,
            EmergencyType::FoodWater => self.food_water += 1,
            EmergencyType::Medical => self.medical += 1,
            EmergencyType::RescueAssistance => self.rescue_assistance += 1,
            EmergencyType::MissingPerson => self.missing_person += 1,
            EmergencyType::DryFood => self.dry_food += 1,
            EmergencyType::Other => self.other += 1,
        }

        if record.has_children {
            self.has_children += 1;
        }
        if record.has_elderly {
            self.has_elderly += 1;
        }
        if record.has_disabled {
            self.has_disabled += 1;
        }
        if record.has_medical_emergency {
            self.has_medical_emergency += 1;
        }
    }

    /// Adds every count of `other` into `self`, keeping `self.district`.
    pub fn accumulate(&mut self, other: &DistrictSummary) {
        self.total += other.total;
        self.total_people += other.total_people;
        self.pending += other.pending;
        self.verified += other.verified;
        self.acknowledged += other.acknowledged;
        self.in_progress += other.in_progress;
        self.rescued += other.rescued;
        self.completed += other.completed;
        self.cannot_contact += other.cannot_contact;
        self.missing += other.missing;
        self.critical += other.critical;
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
        self.trapped += other.trapped;
        self.food_water += other.food_water;
        self.medical += other.medical;
        self.rescue_assistance += other.rescue_assistance;
        self.missing_person += other.missing_person;
        self.dry_food += other.dry_food;
        self.other += other.other;
        self.has_children += other.has_children;
        self.has_elderly += other.has_elderly;
        self.has_disabled += other.has_disabled;
        self.has_medical_emergency += other.has_medical_emergency;
    }

    pub fn status_sum(&self) -> u64 {
        self.pending
            + self.verified
            + self.acknowledged
            + self.in_progress
            + self.rescued
            + self.completed
            + self.cannot_contact
            + self.missing
    }

    fn categorical_counts(&self) -> [(&'static str, u64); 23] {
        [
            ("critical", self.critical),
            ("high", self.high),
            ("medium", self.medium),
            ("low", self.low),
            ("trapped", self.trapped),
            ("foodWater", self.food_water),
            ("medical", self.medical),
            ("rescueAssistance", self.rescue_assistance),
            ("missingPerson", self.missing_person),
            ("dryFood", self.dry_food),
            ("other", self.other),
            ("hasChildren", self.has_children),
            ("hasElderly", self.has_elderly),
            ("hasDisabled", self.has_disabled),
            ("hasMedicalEmergency", self.has_medical_emergency),
            ("pending", self.pending),
            ("verified", self.verified),
            ("acknowledged", self.acknowledged),
            ("inProgress", self.in_progress),
            ("rescued", self.rescued),
            ("completed", self.completed),
            ("cannotContact", self.cannot_contact),
            ("missing", self.missing),
        ]
    }

    /// Checks the summary's internal consistency.
    ///
    /// Every categorical count must fit within `total`, and the per-status
    /// counts must add up to `total`. Records with an unrecognised status
    /// break the second rule; callers log rather than reject.
    pub fn validate(&self) -> Result<(), SummaryError> {
        if let Some((field, count)) = self
            .categorical_counts()
            .into_iter()
            .find(|(_, count)| *count > self.total)
        {
            return Err(SummaryError::CountExceedsTotal {
                district: self.district.clone(),
                field,
                count,
                total: self.total,
            });
        }

        let status_sum = self.status_sum();
        if status_sum != self.total {
            return Err(SummaryError::StatusMismatch {
                district: self.district.clone(),
                total: self.total,
                status_sum,
            });
        }
        Ok(())
    }
}
