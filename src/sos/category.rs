//! Classification of the feed's free-form status, priority and type strings.

use serde::Serialize;

/// Lifecycle stage of a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    Verified,
    Acknowledged,
    InProgress,
    Rescued,
    Completed,
    CannotContact,
    Missing,
    /// Blank or unrecognised status string.
    Unknown,
}

impl Status {
    pub fn classify(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "PENDING" => Status::Pending,
            "VERIFIED" => Status::Verified,
            "ACKNOWLEDGED" => Status::Acknowledged,
            "IN_PROGRESS" => Status::InProgress,
            "RESCUED" => Status::Rescued,
            "COMPLETED" => Status::Completed,
            "CANNOT_CONTACT" => Status::CannotContact,
            "MISSING" => Status::Missing,
            _ => Status::Unknown,
        }
    }
}

/// Severity tier of a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Priority {
    pub fn classify(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "CRITICAL" => Priority::Critical,
            "HIGH" => Priority::High,
            "MEDIUM" => Priority::Medium,
            "LOW" => Priority::Low,
            _ => Priority::Unknown,
        }
    }
}

/// Kind of help requested.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EmergencyType {
    Trapped,
    FoodWater,
    Medical,
    RescueAssistance,
    MissingPerson,
    DryFood,
    Other,
}

impl EmergencyType {
    /// Substring match in a fixed order; the first keyword found wins.
    pub fn classify(raw: &str) -> Self {
        let value = raw.to_uppercase();
        if value.contains("TRAPPED") {
            EmergencyType::Trapped
        } else if value.contains("FOOD") || value.contains("WATER") {
            EmergencyType::FoodWater
        } else if value.contains("MEDICAL") {
            EmergencyType::Medical
        } else if value.contains("RESCUE") {
            EmergencyType::RescueAssistance
        } else if value.contains("MISSING") {
            EmergencyType::MissingPerson
        } else if value.contains("DRY") {
            EmergencyType::DryFood
        } else {
            EmergencyType::Other
        }
    }
}

/// Upper-cases and maps spaces/dashes to underscores, so "In progress" and
/// "in-progress" both read as `IN_PROGRESS`.
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_case_insensitive() {
        assert_eq!(Status::classify("pending"), Status::Pending);
        assert_eq!(Status::classify("In Progress"), Status::InProgress);
        assert_eq!(Status::classify("cannot-contact"), Status::CannotContact);
        assert_eq!(Status::classify(""), Status::Unknown);
        assert_eq!(Status::classify("archived"), Status::Unknown);
    }

    #[test]
    fn test_status_display_matches_feed_keys() {
        assert_eq!(Status::CannotContact.to_string(), "CANNOT_CONTACT");
        assert_eq!(Status::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(Priority::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_priority_tiers() {
        assert_eq!(Priority::classify("CRITICAL"), Priority::Critical);
        assert_eq!(Priority::classify("low "), Priority::Low);
        assert_eq!(Priority::classify("urgent"), Priority::Unknown);
    }

    #[test]
    fn test_emergency_type_first_keyword_wins() {
        assert_eq!(EmergencyType::classify("TRAPPED"), EmergencyType::Trapped);
        assert_eq!(
            EmergencyType::classify("trapped_needs_water"),
            EmergencyType::Trapped
        );
        assert_eq!(EmergencyType::classify("FOOD_WATER"), EmergencyType::FoodWater);
        assert_eq!(
            EmergencyType::classify("medical_rescue"),
            EmergencyType::Medical
        );
        assert_eq!(
            EmergencyType::classify("RESCUE_ASSISTANCE"),
            EmergencyType::RescueAssistance
        );
        assert_eq!(
            EmergencyType::classify("MISSING_PERSON"),
            EmergencyType::MissingPerson
        );
        assert_eq!(EmergencyType::classify("DRY_FOOD"), EmergencyType::FoodWater);
        assert_eq!(EmergencyType::classify("DRY"), EmergencyType::DryFood);
        assert_eq!(EmergencyType::classify("dry_rations"), EmergencyType::DryFood);
        assert_eq!(EmergencyType::classify("SHELTER"), EmergencyType::Other);
        assert_eq!(EmergencyType::classify(""), EmergencyType::Other);
    }
}
