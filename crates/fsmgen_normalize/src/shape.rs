//! Resolution of list-or-mapping collection shapes and scalar coercions.

use serde_json::{Map, Value};

use crate::error::NormalizeError;

/// A raw description record.
pub(crate) type Record = Map<String, Value>;

/// How the value of a mapping entry is folded into its expanded record.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Shorthand {
    /// The value becomes the named field.
    Field(&'static str),
    /// Object values merge their fields into the record; scalars become the named field.
    Merge(&'static str),
}

impl Shorthand {
    fn expand(self, name: &str, value: &Value) -> Record {
        let mut record = named(name);
        match (self, value) {
            (Shorthand::Merge(_), Value::Object(fields)) => {
                record.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            (Shorthand::Field(field) | Shorthand::Merge(field), value) => {
                record.insert(field.to_string(), value.clone());
            }
        }
        record
    }
}

/// Expands a collection into an ordered list of records.
///
/// Lists keep their order; bare strings inside a list become `{name}`.
/// Mappings expand in key order with each key as `name`. Any other shape,
/// including an absent field, is an empty collection.
pub(crate) fn expand(
    value: Option<&Value>,
    shorthand: Shorthand,
    path: &str,
) -> Result<Vec<Record>, NormalizeError> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(fields) => Ok(fields.clone()),
                Value::String(name) => Ok(named(name)),
                _ => Err(NormalizeError::InvalidItem {
                    path: format!("{path}[{i}]"),
                }),
            })
            .collect(),
        Some(Value::Object(entries)) => Ok(entries
            .iter()
            .map(|(name, value)| shorthand.expand(name, value))
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn named(name: &str) -> Record {
    let mut record = Record::new();
    record.insert("name".to_string(), Value::String(name.to_string()));
    record
}

/// Renders a scalar as expression text. Booleans become `1`/`0`.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        _ => None,
    }
}

/// Reads a non-empty scalar field as text.
pub(crate) fn text_field(record: &Record, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(scalar_text)
        .filter(|text| !text.is_empty())
}

/// Reads a bit width: a positive integer, given as a number or a numeric string.
pub(crate) fn width_field(record: &Record, key: &str) -> Option<u32> {
    let width = match record.get(key)? {
        Value::Number(n) => n.as_u64().and_then(|w| u32::try_from(w).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    width.filter(|w| *w >= 1)
}

/// Reads a flag: a boolean, or a number where non-zero is set.
pub(crate) fn flag_field(record: &Record, key: &str) -> bool {
    match record.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    }
}

/// Renders a presentation attribute value verbatim.
pub(crate) fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(records: &[Record]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn mapping_expands_in_key_order() {
        let raw = json!({"zeta": 1, "alpha": 2, "mid": 3});
        let records = expand(Some(&raw), Shorthand::Field("condition"), "next").unwrap();
        assert_eq!(names(&records), vec!["zeta", "alpha", "mid"]);
        assert_eq!(records[1]["condition"], 2);
    }

    #[test]
    fn merge_shorthand_folds_objects() {
        let raw = json!({"count": {"width": 8, "init": "8'd3"}, "flag": 1});
        let records = expand(Some(&raw), Shorthand::Merge("width"), "registers").unwrap();
        assert_eq!(records[0]["width"], 8);
        assert_eq!(records[0]["init"], "8'd3");
        assert_eq!(records[1]["width"], 1);
    }

    #[test]
    fn list_keeps_records_and_names() {
        let raw = json!([{"name": "a", "next": []}, "b"]);
        let records = expand(Some(&raw), Shorthand::Field("next"), "states").unwrap();
        assert_eq!(names(&records), vec!["a", "b"]);
    }

    #[test]
    fn list_rejects_non_records() {
        let raw = json!(["a", 7]);
        let err = expand(Some(&raw), Shorthand::Field("next"), "states").unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidItem { ref path } if path == "states[1]"));
    }

    #[test]
    fn other_shapes_are_empty() {
        assert!(expand(None, Shorthand::Field("next"), "states").unwrap().is_empty());
        let raw = json!("nonsense");
        assert!(expand(Some(&raw), Shorthand::Field("next"), "states")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(scalar_text(&json!("a & b")).as_deref(), Some("a & b"));
        assert_eq!(scalar_text(&json!(1)).as_deref(), Some("1"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("1"));
        assert_eq!(scalar_text(&json!(false)).as_deref(), Some("0"));
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!([1])), None);
    }

    #[test]
    fn width_accepts_positive_integers() {
        let rec = json!({"a": 4, "b": "3", "c": 0, "d": -2, "e": 1.5})
            .as_object()
            .unwrap()
            .clone();
        assert_eq!(width_field(&rec, "a"), Some(4));
        assert_eq!(width_field(&rec, "b"), Some(3));
        assert_eq!(width_field(&rec, "c"), None);
        assert_eq!(width_field(&rec, "d"), None);
        assert_eq!(width_field(&rec, "e"), None);
        assert_eq!(width_field(&rec, "missing"), None);
    }
}
