use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::common::normalize::{number_field, string_field, string_list_field};

pub const UNKNOWN_NAME: &str = "Unknown";

/// What the model believes the photographed plant is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantIdentification {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub care_tips: Vec<String>,
    pub problems: Vec<String>,
    /// Nominally in `[0, 1]`; passed through from the model as-is.
    pub confidence: f64,
}

impl Default for PlantIdentification {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            scientific_name: String::new(),
            description: String::new(),
            care_tips: Vec::new(),
            problems: Vec::new(),
            confidence: 0.0,
        }
    }
}

impl PlantIdentification {
    /// Builds a record from any JSON value, defaulting every missing or
    /// mistyped field.
    pub fn from_json_value(value: &Value) -> Self {
        Self {
            name: string_field(value, "name", UNKNOWN_NAME),
            scientific_name: string_field(value, "scientificName", ""),
            description: string_field(value, "description", ""),
            care_tips: string_list_field(value, "careTips"),
            problems: string_list_field(value, "problems"),
            confidence: number_field(value, "confidence"),
        }
    }
}

/// Disease diagnosis for a photographed plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDiagnosis {
    pub name: String,
    pub description: String,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub confidence: f64,
}

impl Default for DiseaseDiagnosis {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            description: String::new(),
            treatment: Vec::new(),
            prevention: Vec::new(),
            confidence: 0.0,
        }
    }
}

impl DiseaseDiagnosis {
    pub fn from_json_value(value: &Value) -> Self {
        Self {
            name: string_field(value, "name", UNKNOWN_NAME),
            description: string_field(value, "description", ""),
            treatment: string_list_field(value, "treatment"),
            prevention: string_list_field(value, "prevention"),
            confidence: number_field(value, "confidence"),
        }
    }
}

/// Identification and disease results obtained together for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Diagnosis {
    pub identification: PlantIdentification,
    pub disease: DiseaseDiagnosis,
}
