//! Field decoders that never fail.
//!
//! The calculation service is best-effort: a field may be missing, null, or of
//! the wrong JSON type while the rest of the response is fine. These helpers
//! are used with `#[serde(deserialize_with = ...)]` so one bad field degrades to
//! its default instead of rejecting the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Finite JSON number, anything else is `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}

/// JSON string, anything else is `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// Truthiness of a flag as the web client sees it.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(truthy(&value))
}

pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0 && !v.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String elements of an array; other elements and non-arrays are dropped.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(strings_in(&value))
}

pub fn strings_in(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Strength component that is either a bare number or an object with a `total`.
pub fn component<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let total = match &value {
        Value::Object(map) => map.get("total").and_then(Value::as_f64),
        other => other.as_f64(),
    };
    Ok(total.filter(|v| v.is_finite()))
}

/// Decode a nested record, `None` when absent or malformed.
pub fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(err) => {
            log::debug!("ignoring malformed record: {err}");
            Ok(None)
        }
    }
}

/// Name-keyed map of records; malformed entries are dropped individually.
pub fn map_of<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let mut out = HashMap::new();
    match value {
        Value::Object(entries) => {
            for (key, entry) in entries {
                match serde_json::from_value::<T>(entry) {
                    Ok(decoded) => {
                        out.insert(key, decoded);
                    }
                    Err(err) => log::debug!("dropping malformed entry {key:?}: {err}"),
                }
            }
        }
        Value::Null => {}
        other => log::debug!("expected an object map, got {}", json_kind(&other)),
    }
    Ok(out)
}

/// Array of records; malformed elements are dropped individually.
pub fn list_of<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let mut out = Vec::new();
    if let Value::Array(items) = value {
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<T>(item) {
                Ok(decoded) => out.push(decoded),
                Err(err) => log::debug!("dropping malformed element {index}: {err}"),
            }
        }
    }
    Ok(out)
}

/// House-number keyed map. `None` when the field is absent or not a collection.
///
/// Objects are keyed by the house number as a string; arrays are read as
/// houses 1, 2, ... in order.
pub fn house_map<'de, D, T>(deserializer: D) -> Result<Option<BTreeMap<u8, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let entries: Vec<(u8, Value)> = match value {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, entry)| key.trim().parse::<u8>().ok().map(|house| (house, entry)))
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| u8::try_from(index + 1).ok().map(|house| (house, entry)))
            .collect(),
        Value::Null => return Ok(None),
        other => {
            log::debug!("expected house map, got {}", json_kind(&other));
            return Ok(None);
        }
    };

    let mut out = BTreeMap::new();
    for (house, entry) in entries {
        match serde_json::from_value::<T>(entry) {
            Ok(decoded) => {
                out.insert(house, decoded);
            }
            Err(err) => log::debug!("dropping malformed house {house}: {err}"),
        }
    }
    Ok(Some(out))
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
