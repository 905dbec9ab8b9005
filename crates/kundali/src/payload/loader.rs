use crate::payload::types::KundaliResponse;
use crate::strength::compatibility::MatchResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when loading a response document
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Response must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Load a response from JSON text.
///
/// Only the document itself can fail: field-level problems inside an object
/// degrade to defaults.
pub fn load_response_from_json(json: &str) -> Result<KundaliResponse, PayloadError> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| PayloadError::InvalidJson(e.to_string()))?;
    load_response_from_value(parsed)
}

/// Load a response from an already parsed JSON value
pub fn load_response_from_value(value: Value) -> Result<KundaliResponse, PayloadError> {
    decode_object(value)
}

/// Load a chart-matching response from JSON text
pub fn load_match_from_json(json: &str) -> Result<MatchResponse, PayloadError> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| PayloadError::InvalidJson(e.to_string()))?;
    decode_object(parsed)
}

fn decode_object<T: DeserializeOwned>(value: Value) -> Result<T, PayloadError> {
    if !value.is_object() {
        return Err(PayloadError::NotAnObject(
            crate::payload::lenient::json_kind(&value),
        ));
    }
    serde_json::from_value(value).map_err(|e| PayloadError::Decode(e.to_string()))
}
