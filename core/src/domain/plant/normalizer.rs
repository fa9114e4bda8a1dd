use crate::domain::{
    common::normalize::{NormalizeError, parse_fenced_json},
    plant::entities::{DiseaseDiagnosis, PlantIdentification},
};

/// Turns the model's identification answer into a [`PlantIdentification`].
///
/// Only the JSON syntax is checked. A value that is not an object yields an
/// all-default record.
pub fn normalize_identification(raw: &str) -> Result<PlantIdentification, NormalizeError> {
    let value = parse_fenced_json(raw)?;
    Ok(PlantIdentification::from_json_value(&value))
}

pub fn normalize_disease(raw: &str) -> Result<DiseaseDiagnosis, NormalizeError> {
    let value = parse_fenced_json(raw)?;
    Ok(DiseaseDiagnosis::from_json_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONSTERA: &str = r#"{
        "name": "Swiss cheese plant",
        "scientificName": "Monstera deliciosa",
        "description": "Climbing evergreen with split leaves",
        "careTips": ["Bright indirect light", "Water when topsoil is dry"],
        "problems": ["Yellowing lower leaves"],
        "confidence": 0.92
    }"#;

    #[test]
    fn test_identification_full_record() {
        let plant = normalize_identification(MONSTERA).unwrap();
        assert_eq!(plant.name, "Swiss cheese plant");
        assert_eq!(plant.scientific_name, "Monstera deliciosa");
        assert_eq!(plant.care_tips.len(), 2);
        assert_eq!(plant.problems, vec!["Yellowing lower leaves"]);
        assert_eq!(plant.confidence, 0.92);
    }

    #[test]
    fn test_identification_ignores_fences() {
        let bare = normalize_identification(MONSTERA).unwrap();

        for wrapped in [
            format!("```json\n{MONSTERA}\n```"),
            format!("```\n{MONSTERA}\n```"),
            format!("  ```JSON{MONSTERA}```\n"),
        ] {
            assert_eq!(normalize_identification(&wrapped).unwrap(), bare);
        }
    }

    #[test]
    fn test_identification_defaults_missing_fields() {
        let plant = normalize_identification("{}").unwrap();
        assert_eq!(plant, PlantIdentification::default());
        assert_eq!(plant.name, "Unknown");
        assert_eq!(plant.scientific_name, "");
        assert_eq!(plant.description, "");
        assert!(plant.care_tips.is_empty());
        assert!(plant.problems.is_empty());
        assert_eq!(plant.confidence, 0.0);
    }

    #[test]
    fn test_identification_defaults_partial_record() {
        let plant = normalize_identification(r#"{"name": "Tulsi", "careTips": null}"#).unwrap();
        assert_eq!(plant.name, "Tulsi");
        assert!(plant.care_tips.is_empty());
        assert_eq!(plant.confidence, 0.0);
    }

    #[test]
    fn test_identification_non_object_is_all_defaults() {
        let plant = normalize_identification("[1, 2, 3]").unwrap();
        assert_eq!(plant, PlantIdentification::default());
    }

    #[test]
    fn test_identification_confidence_not_clamped() {
        let plant = normalize_identification(r#"{"confidence": 3.5}"#).unwrap();
        assert_eq!(plant.confidence, 3.5);
    }

    #[test]
    fn test_identification_invalid_json() {
        let err = normalize_identification("```json\nThis looks like a fern.\n```").unwrap_err();
        assert!(matches!(err, NormalizeError::Parse { .. }));
    }

    #[test]
    fn test_disease_defaults_and_fences() {
        let disease = normalize_disease(
            "```json\n{\"name\": \"Powdery mildew\", \"treatment\": [\"Neem oil\"]}\n```",
        )
        .unwrap();
        assert_eq!(disease.name, "Powdery mildew");
        assert_eq!(disease.description, "");
        assert_eq!(disease.treatment, vec!["Neem oil"]);
        assert!(disease.prevention.is_empty());
        assert_eq!(disease.confidence, 0.0);
    }

    #[test]
    fn test_disease_invalid_json() {
        assert!(matches!(
            normalize_disease("no disease found"),
            Err(NormalizeError::Parse { .. })
        ));
    }
}
