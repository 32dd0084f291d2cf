//! Wire types of the SOS feed.
//!
//! Field names follow the feed's camelCase JSON. Nullable fields are `Option`s
//! so "not reported" never collapses into an empty string or a zero.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The feed sends `null` for some fields that are otherwise always present.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One citizen-reported emergency.
///
/// Every scalar accepts `null` as its default, so a sparsely filled record
/// still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SosRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_phone: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub landmark: String,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emergency_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_people: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub has_children: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_elderly: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_disabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_medical_emergency: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub medical_details: String,
    #[serde(deserialize_with = "null_as_default")]
    pub water_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub building_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub floor_level: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub safe_for_hours: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub internal_notes: Option<String>,
    pub verified_by: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_food: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_water: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_power_bank: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub battery_percentage: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub priority: String,
    pub rescue_team: Option<String>,
    pub acknowledged_at: Option<String>,
    pub rescued_at: Option<String>,
    pub completed_at: Option<String>,
    pub action_taken: Option<String>,
    pub action_taken_at: Option<String>,
    pub action_taken_by: Option<String>,
    pub verified_location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    /// Feed fields this dashboard does not interpret, kept for the raw export.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pagination cursor returned with every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub limit: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Counts aggregated over the whole filtered result set, not just one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiStats {
    pub total_people: u64,
    pub missing_people_count: u64,
    pub by_status: BTreeMap<String, u64>,
    pub by_priority: BTreeMap<String, u64>,
}

/// One page of the SOS feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Vec<SosRecord>,
    pub pagination: Pagination,
    pub stats: Option<ApiStats>,
}

impl ApiResponse {
    /// A page must never carry more records than it was asked for.
    pub fn exceeds_limit(&self) -> bool {
        self.pagination.limit > 0 && self.data.len() > self.pagination.limit as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_page_from_feed_json() {
        let json = r#"{
            "success": true,
            "data": [{
                "id": 7,
                "referenceNumber": "SOS-0007",
                "fullName": "A. Person",
                "latitude": "9.9312",
                "longitude": null,
                "district": "Ernakulam",
                "emergencyType": "TRAPPED",
                "numberOfPeople": 4,
                "hasChildren": true,
                "internalNotes": null,
                "status": "PENDING",
                "priority": "CRITICAL",
                "rescuedAt": null
            }, {
                "id": 8,
                "district": null,
                "status": null,
                "numberOfPeople": null
            }],
            "pagination": {
                "currentPage": 1, "totalPages": 3, "totalCount": 250,
                "limit": 100, "hasNextPage": true, "hasPrevPage": false
            },
            "stats": {
                "totalPeople": 900, "missingPeopleCount": 12,
                "byStatus": {"PENDING": 200, "RESCUED": 50},
                "byPriority": {"CRITICAL": 30}
            }
        }"#;

        let page: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(page.success);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.exceeds_limit());

        let record = &page.data[0];
        assert_eq!(record.reference_number, "SOS-0007");
        assert_eq!(record.latitude.as_deref(), Some("9.9312"));
        assert_eq!(record.longitude, None);
        assert_eq!(record.number_of_people, 4);
        assert!(record.has_children);
        // Fields the feed omitted fall back to their defaults.
        assert_eq!(record.landmark, "");
        assert!(!record.has_elderly);

        let sparse = &page.data[1];
        assert_eq!(sparse.district, "");
        assert_eq!(sparse.status, "");
        assert_eq!(sparse.number_of_people, 0);

        let stats = page.stats.unwrap();
        assert_eq!(stats.by_status.get("PENDING"), Some(&200));
        assert_eq!(stats.missing_people_count, 12);
    }

    #[test]
    fn test_null_scalars_decode_as_defaults() {
        let json = r#"{"success": true, "data": [{
            "id": 1,
            "district": "A",
            "alternatePhone": null,
            "landmark": null,
            "hasElderly": null,
            "floorLevel": null,
            "batteryPercentage": null
        }]}"#;

        let page: ApiResponse = serde_json::from_str(json).unwrap();
        let record = &page.data[0];
        assert_eq!(record.district, "A");
        assert_eq!(record.alternate_phone, "");
        assert_eq!(record.landmark, "");
        assert!(!record.has_elderly);
        assert_eq!(record.floor_level, 0);
        assert_eq!(record.battery_percentage, 0);
    }

    #[test]
    fn test_unknown_fields_survive_a_round_trip() {
        let json = r#"{"id": 3, "district": "Kollam", "boatRequired": true, "ward": "12"}"#;
        let record: SosRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra.get("boatRequired"), Some(&Value::Bool(true)));
        assert_eq!(record.extra.len(), 2);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["ward"], "12");
        assert_eq!(value["district"], "Kollam");
    }

    #[test]
    fn test_missing_stats_are_none() {
        let page: ApiResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!page.success);
        assert!(page.data.is_empty());
        assert!(page.stats.is_none());
    }

    #[test]
    fn test_serializes_back_to_camel_case() {
        let record = SosRecord {
            reference_number: "SOS-1".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["referenceNumber"], "SOS-1");
        assert!(value["latitude"].is_null());
    }
}
