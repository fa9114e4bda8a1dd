use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{common::normalize::string_field, plant::entities::UNKNOWN_NAME};

/// A plant recommended for a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantSuggestion {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
}

impl PlantSuggestion {
    pub fn from_json_value(value: &Value) -> Self {
        Self {
            name: string_field(value, "name", UNKNOWN_NAME),
            scientific_name: string_field(value, "scientificName", ""),
            description: string_field(value, "description", ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionSuggestionSet {
    pub region: String,
    pub suggestions: Vec<PlantSuggestion>,
}

/// Indian regions offered by the region picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northern,
    Southern,
    Eastern,
    Western,
    Central,
    Northeastern,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Northern,
        Region::Southern,
        Region::Eastern,
        Region::Western,
        Region::Central,
        Region::Northeastern,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Region::Northern => "northern",
            Region::Southern => "southern",
            Region::Eastern => "eastern",
            Region::Western => "western",
            Region::Central => "central",
            Region::Northeastern => "northeastern",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Northern => "Northern India",
            Region::Southern => "Southern India",
            Region::Eastern => "Eastern India",
            Region::Western => "Western India",
            Region::Central => "Central India",
            Region::Northeastern => "North-Eastern India",
        }
    }

    /// Case-insensitive lookup by identifier.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.value().eq_ignore_ascii_case(value.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup() {
        assert_eq!(Region::from_value("Northern"), Some(Region::Northern));
        assert_eq!(Region::from_value(" northeastern "), Some(Region::Northeastern));
        assert_eq!(Region::from_value("kerala"), None);
    }

    #[test]
    fn test_region_serializes_as_value() {
        let json = serde_json::to_value(Region::Northeastern).unwrap();
        assert_eq!(json, serde_json::json!("northeastern"));
    }
}
