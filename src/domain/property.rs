// src/domain/property.rs

use serde::{Deserialize, Serialize};

/// One property listing as it appears in the upstream JSON dataset.
///
/// Every field is optional: rows in the source sheet are frequently sparse,
/// and a missing value renders as a placeholder rather than failing anywhere
/// downstream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyRecord {
    pub area: Option<String>,
    pub status: Option<String>,
    pub project_name: Option<String>,
    pub configuration: Option<String>,
    pub carpet: Option<String>,
    pub pricing: Option<String>,
    pub elevation: Option<String>,
    pub flats_lifts: Option<String>,
    pub amenities: Option<String>,
    pub possession: Option<String>,
}

/// The searchable columns, in display order: `(wire name, column header)`.
///
/// Wire names match the JSON dataset. Both the filter engine and the table
/// renderer walk this table, so the two always agree on the field set.
pub const FIELD_COLUMNS: [(&str, &str); 10] = [
    ("area", "Area"),
    ("status", "Status"),
    ("projectName", "Project Name"),
    ("configuration", "Config"),
    ("carpet", "Carpet"),
    ("pricing", "Pricing"),
    ("elevation", "Elevation"),
    ("flatsLifts", "Flats/Lifts"),
    ("amenities", "Amenities"),
    ("possession", "Possession"),
];

impl PropertyRecord {
    /// Look up a field value by its wire name.
    pub fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "area" => &self.area,
            "status" => &self.status,
            "projectName" => &self.project_name,
            "configuration" => &self.configuration,
            "carpet" => &self.carpet,
            "pricing" => &self.pricing,
            "elevation" => &self.elevation,
            "flatsLifts" => &self.flats_lifts,
            "amenities" => &self.amenities,
            "possession" => &self.possession,
            _ => return None,
        };
        value.as_deref()
    }

    /// All fields in `FIELD_COLUMNS` order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        FIELD_COLUMNS.iter().map(move |(key, _)| (*key, self.field(key)))
    }
}

/// Human-readable label for a status code. The code set is open; anything
/// unknown passes through unchanged.
pub fn status_label(code: &str) -> &str {
    match code.to_uppercase().as_str() {
        "RTMI" => "Ready to Move In",
        "UC" => "Under Construction",
        "NP" => "New Project",
        _ => code,
    }
}

/// CSS badge class for a status code.
pub fn status_badge_class(code: &str) -> &'static str {
    match code.to_uppercase().as_str() {
        "RTMI" => "badge badge-green",
        "UC" => "badge badge-yellow",
        "NP" => "badge badge-blue",
        _ => "badge badge-gray",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lookup_maps_known_codes() {
        assert_eq!(status_label("RTMI"), "Ready to Move In");
        assert_eq!(status_label("UC"), "Under Construction");
        assert_eq!(status_label("NP"), "New Project");
        // Codes are matched case-insensitively.
        assert_eq!(status_label("rtmi"), "Ready to Move In");

        assert_eq!(status_badge_class("RTMI"), "badge badge-green");
        assert_eq!(status_badge_class("UC"), "badge badge-yellow");
        assert_eq!(status_badge_class("NP"), "badge badge-blue");
    }

    #[test]
    fn unknown_status_codes_pass_through() {
        assert_eq!(status_label("SOLD OUT"), "SOLD OUT");
        assert_eq!(status_badge_class("SOLD OUT"), "badge badge-gray");
    }

    #[test]
    fn record_deserializes_from_camel_case_json() {
        let raw = r#"{
            "area": "JP Road",
            "status": "RTMI",
            "projectName": "Naman Habitat",
            "configuration": "2bhk",
            "carpet": "769",
            "pricing": "3.24cr all in",
            "elevation": "2B+4P+15",
            "flatsLifts": "4flats/2lifts",
            "amenities": "All Amenities",
            "possession": "Part OC Received"
        }"#;

        let record: PropertyRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.project_name.as_deref(), Some("Naman Habitat"));
        assert_eq!(record.flats_lifts.as_deref(), Some("4flats/2lifts"));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let record: PropertyRecord = serde_json::from_str(r#"{"area": "Lokhandwala"}"#).unwrap();

        assert_eq!(record.area.as_deref(), Some("Lokhandwala"));
        assert_eq!(record.status, None);
        assert_eq!(record.possession, None);
    }

    #[test]
    fn fields_iterates_in_column_order() {
        let record = PropertyRecord {
            area: Some("DN Nagar".to_string()),
            status: Some("UC".to_string()),
            ..Default::default()
        };

        let fields: Vec<_> = record.fields().collect();
        assert_eq!(fields.len(), FIELD_COLUMNS.len());
        assert_eq!(fields[0], ("area", Some("DN Nagar")));
        assert_eq!(fields[1], ("status", Some("UC")));
        assert_eq!(fields[2], ("projectName", None));
    }
}
