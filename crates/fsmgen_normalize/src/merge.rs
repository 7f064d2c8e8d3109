//! Merging of repeated state declarations.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::NormalizeError;
use crate::shape::{text_field, Record};

/// Merges records that share a `name`, keeping first-seen order.
///
/// A later record merges into the first one field by field: when both values
/// are lists they are concatenated, otherwise the later value wins.
pub(crate) fn merge_by_name(records: Vec<Record>, path: &str) -> Result<Vec<Record>, NormalizeError> {
    let mut merged: Vec<Record> = Vec::with_capacity(records.len());
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (i, record) in records.into_iter().enumerate() {
        let name = text_field(&record, "name").ok_or_else(|| NormalizeError::MissingName {
            path: format!("{path}[{i}]"),
        })?;
        match slots.get(&name) {
            Some(&slot) => merge_into(&mut merged[slot], record),
            None => {
                slots.insert(name, merged.len());
                merged.push(record);
            }
        }
    }
    Ok(merged)
}

fn merge_into(existing: &mut Record, later: Record) {
    for (key, value) in later {
        if let (Some(Value::Array(items)), Value::Array(more)) = (existing.get_mut(&key), &value) {
            items.extend(more.iter().cloned());
            continue;
        }
        existing.insert(key, value);
    }
}
