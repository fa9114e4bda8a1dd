use crate::domain::{
    common::normalize::{NormalizeError, json_kind, parse_fenced_json},
    suggestion::entities::PlantSuggestion,
};

/// Turns the model's suggestion answer into a list of [`PlantSuggestion`].
/// The answer must be a JSON array; elements are defaulted field by field.
pub fn normalize_suggestions(raw: &str) -> Result<Vec<PlantSuggestion>, NormalizeError> {
    let value = parse_fenced_json(raw)?;

    let items = value.as_array().ok_or_else(|| NormalizeError::Shape {
        expected: "array",
        found: json_kind(&value),
        raw: raw.to_string(),
    })?;

    Ok(items.iter().map(PlantSuggestion::from_json_value).collect())
}
