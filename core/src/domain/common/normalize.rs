//! Helpers for coercing free-form model output into fixed-shape records.
//!
//! Models often wrap JSON answers in markdown code fences and omit or mistype
//! fields. Everything here is pure and works on borrowed text.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::domain::common::entities::app_errors::CoreError;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```(?:json)?").expect("leading fence pattern is valid"));

static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```$").expect("trailing fence pattern is valid"));

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("response is not valid JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
        raw: String,
    },
}

impl NormalizeError {
    /// The untouched model output that failed to normalize.
    pub fn raw(&self) -> &str {
        match self {
            NormalizeError::Parse { raw, .. } | NormalizeError::Shape { raw, .. } => raw,
        }
    }

    /// Maps into the core taxonomy with a caller-facing message that never
    /// includes the raw model output.
    pub fn into_core(self, message: &str) -> CoreError {
        match self {
            NormalizeError::Parse { .. } => CoreError::ParseError(message.to_string()),
            NormalizeError::Shape { .. } => CoreError::ShapeError(message.to_string()),
        }
    }
}

/// Removes a leading ```` ``` ```` / ```` ```json ```` marker and a trailing
/// ```` ``` ```` marker, trimming surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(fence) = LEADING_FENCE.find(text) {
        text = &text[fence.end()..];
    }

    if let Some(fence) = TRAILING_FENCE.find(text) {
        text = &text[..fence.start()];
    }

    text.trim()
}

/// Strips fences and parses the remainder as JSON.
pub fn parse_fenced_json(raw: &str) -> Result<Value, NormalizeError> {
    serde_json::from_str(strip_code_fences(raw)).map_err(|source| NormalizeError::Parse {
        source,
        raw: raw.to_string(),
    })
}

/// Human name of a JSON value's kind, used in shape errors.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a string field. Absent, non-string and empty values fall back to `default`.
pub fn string_field(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Reads an array of strings. Non-string elements are skipped; anything other
/// than an array yields an empty list.
pub fn string_list_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Reads a numeric field, passing the value through unclamped.
pub fn number_field(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
