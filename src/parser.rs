//! Defensive validation of the model's JSON payload.
//!
//! The provider's schema is requested via prompt only, so every field is
//! treated as optional and possibly mistyped. Malformed JSON is a hard
//! failure; a gap in a single object's fields never is.

use crate::types::{AnalysisResult, DetectedObject};
use serde_json::Value;

/// Errors from interpreting the model's response text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Empty model response")]
    EmptyResponse,

    #[error("Malformed model response: {0}")]
    MalformedJson(serde_json::Error),
}

/// Map an untrusted model payload into a validated [`AnalysisResult`].
///
/// Absent, null, or wrong-typed object fields fall back to `"unknown"`
/// (strings) or `0.0` (numbers) so one imprecise object cannot reject
/// the whole response. Objects keep the model's emission order; sorting
/// is the report layer's concern.
///
/// # Errors
///
/// Returns an error if the response is empty or is not valid JSON.
pub fn parse_analysis(response: &str) -> Result<AnalysisResult, ParseError> {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let payload: Value = serde_json::from_str(trimmed).map_err(ParseError::MalformedJson)?;

    let objects = payload
        .get("objects")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().map(parse_object).collect())
        .unwrap_or_default();

    let warnings = payload
        .get("warnings")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(AnalysisResult { objects, warnings })
}

fn parse_object(value: &Value) -> DetectedObject {
    let bbox = value.get("box");
    DetectedObject {
        label: str_field(value, "label"),
        description: str_field(value, "description"),
        confidence: num_field(Some(value), "confidence"),
        x: num_field(bbox, "x"),
        y: num_field(bbox, "y"),
        w: num_field(bbox, "w"),
        h: num_field(bbox, "h"),
    }
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn num_field(value: Option<&Value>, key: &str) -> f64 {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}
