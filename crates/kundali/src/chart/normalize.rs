//! Raw chart payload to [`ChartGrid`].
//!
//! The service has shipped charts in three shapes over time:
//!
//! * an array of up to 12 arrays of body names, indexed by sign;
//! * an object keyed by sign index (`"0"`..`"11"`);
//! * an object keyed by sign name, English or localized.
//!
//! Shapes are detected in that order. Anything unrecognized yields an empty
//! grid, never an error.

use crate::chart::grid::ChartGrid;
use crate::payload::lenient::{json_kind, strings_in};
use crate::zodiac::{default_sanskrit_names, SIGNS_EN, SIGN_COUNT};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    static ref NUMERIC_KEY: Regex = Regex::new(r"^[0-9]+$").expect("numeric key pattern");
}

/// Normalize a raw chart into a 12-slot grid.
///
/// `signs_sanskrit` supplies the localized names tried as keys for
/// name-keyed objects; see [`resolve_sign_names`].
pub fn normalize_chart(raw: &Value, signs_sanskrit: &[String]) -> ChartGrid {
    if let Some(rows) = as_array_of_string_arrays(raw) {
        return ChartGrid::from_slots(rows);
    }

    match raw {
        Value::Object(map) if map.keys().any(|k| NUMERIC_KEY.is_match(k)) => {
            from_index_keys(map)
        }
        Value::Object(map) => from_sign_names(map, signs_sanskrit),
        other => {
            if !other.is_null() {
                log::debug!("unrecognized chart shape ({}), using empty grid", json_kind(other));
            }
            ChartGrid::empty()
        }
    }
}

/// Localized sign names from the payload's `signs_sanskrit` field.
///
/// Lists shorter than 12 entries are ignored in favor of the defaults.
/// Non-string entries are stringified the way the web client does it.
pub fn resolve_sign_names(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) if items.len() >= SIGN_COUNT => items.iter().map(display_string).collect(),
        _ => default_sanskrit_names(),
    }
}

fn as_array_of_string_arrays(raw: &Value) -> Option<Vec<Vec<String>>> {
    let rows = raw.as_array()?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let items = row.as_array()?;
        let mut names = Vec::with_capacity(items.len());
        for item in items {
            names.push(item.as_str()?.to_string());
        }
        out.push(names);
    }
    Some(out)
}

fn from_index_keys(map: &Map<String, Value>) -> ChartGrid {
    ChartGrid::from_slots(
        (0..SIGN_COUNT).map(|index| map.get(&index.to_string()).map(strings_in).unwrap_or_default()),
    )
}

fn from_sign_names(map: &Map<String, Value>, signs_sanskrit: &[String]) -> ChartGrid {
    ChartGrid::from_slots((0..SIGN_COUNT).map(|index| {
        let english = SIGNS_EN[index];
        let candidates = [
            Some(english.to_string()),
            Some(english.to_lowercase()),
            signs_sanskrit.get(index).cloned(),
        ];
        candidates
            .into_iter()
            .flatten()
            .find_map(|key| map.get(&key))
            .map(strings_in)
            .unwrap_or_default()
    }))
}

fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // Whole floats print without a fraction: 7.0 -> "7"
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> Vec<String> {
        default_sanskrit_names()
    }

    #[test]
    fn array_rows_beyond_twelve_are_ignored() {
        let rows: Vec<Vec<&str>> = (0..14).map(|_| vec!["Ketu"]).collect();
        let grid = normalize_chart(&json!(rows), &defaults());
        assert_eq!(grid.body_count(), 12);
    }

    #[test]
    fn mixed_arrays_are_not_string_grids() {
        let grid = normalize_chart(&json!([["Sun", 5], ["Moon"]]), &defaults());
        assert!(grid.is_empty());
    }

    #[test]
    fn first_present_key_wins_even_when_not_an_array() {
        let raw = json!({"Aries": "Sun", "aries": ["Moon"]});
        let grid = normalize_chart(&raw, &defaults());
        assert!(grid.slot(0).is_empty());
    }

    #[test]
    fn short_sign_lists_fall_back_to_defaults() {
        assert_eq!(resolve_sign_names(&json!(["A", "B"])), defaults());
        let mut custom: Vec<Value> = (0..11).map(|i| json!(format!("S{i}"))).collect();
        custom.push(json!(7));
        let names = resolve_sign_names(&Value::Array(custom));
        assert_eq!(names[0], "S0");
        assert_eq!(names[11], "7");
    }

    #[test]
    fn numeric_sign_names_print_like_the_web_client() {
        let mut custom: Vec<Value> = (0..9).map(|i| json!(format!("S{i}"))).collect();
        custom.extend([json!(2.5), json!(null), json!(7.0)]);
        let names = resolve_sign_names(&Value::Array(custom));
        assert_eq!(names[9], "2.5");
        assert_eq!(names[10], "null");
        assert_eq!(names[11], "7");
    }
}
