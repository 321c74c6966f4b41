// ABOUTME: Typed field values and the coercion rules from raw form input
// ABOUTME: Defines emptiness, numeric coercion, stringification, and selection id extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FieldTypeTag;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Raw field values keyed by field key, as supplied by the form layer
pub type RawValues = HashMap<String, Value>;

/// A raw value coerced into the variant selected by its field's type tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum FieldValue {
    /// Numeric rating
    Rating(f64),
    /// Submitted selection ids in input order, duplicates included
    MultiSelect(Vec<String>),
    /// Selected id
    SingleSelect(String),
    /// Minutes
    Duration(f64),
    /// Free text
    Text(String),
}

/// Raw value could not be coerced to its tag's variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueCoercionError {
    /// Numeric tag received a value that is not a finite number
    #[error("expected a number, got {raw}")]
    NotNumeric {
        /// Stringified raw value
        raw: String,
    },
}

impl FieldValue {
    /// Coerce a raw value into the variant matching `tag`
    ///
    /// Multi-select input that is not an array becomes an empty selection;
    /// select and text input is stringified. Only numeric tags can fail.
    ///
    /// # Errors
    ///
    /// Returns [`ValueCoercionError::NotNumeric`] when a rating or duration
    /// value is not a finite number or numeric string.
    pub fn from_raw(tag: FieldTypeTag, raw: &Value) -> Result<Self, ValueCoercionError> {
        let numeric = || {
            coerce_number(raw).ok_or_else(|| ValueCoercionError::NotNumeric {
                raw: stringify(raw),
            })
        };
        Ok(match tag {
            FieldTypeTag::Rating => Self::Rating(numeric()?),
            FieldTypeTag::Duration => Self::Duration(numeric()?),
            FieldTypeTag::MultiSelect => Self::MultiSelect(match raw {
                Value::Array(items) => items.iter().map(stringify).collect(),
                _ => Vec::new(),
            }),
            FieldTypeTag::SingleSelect => Self::SingleSelect(stringify(raw)),
            FieldTypeTag::Text => Self::Text(stringify(raw)),
        })
    }

    /// Tag of this value's variant
    #[must_use]
    pub const fn tag(&self) -> FieldTypeTag {
        match self {
            Self::Rating(_) => FieldTypeTag::Rating,
            Self::MultiSelect(_) => FieldTypeTag::MultiSelect,
            Self::SingleSelect(_) => FieldTypeTag::SingleSelect,
            Self::Duration(_) => FieldTypeTag::Duration,
            Self::Text(_) => FieldTypeTag::Text,
        }
    }
}

/// Whether a raw value counts as "not filled in"
///
/// Absent, `null`, blank strings, and empty objects are empty. An array is
/// empty when none of its members is a non-blank id.
/// Numbers and booleans are never empty, including `0` and `false`.
#[must_use]
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.iter().all(is_blank_member),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Bool(_) | Value::Number(_)) => false,
    }
}

fn is_blank_member(item: &Value) -> bool {
    stringify(item).trim().is_empty()
}

/// Number of submitted selections in a raw multi-select value
///
/// Every array member counts, duplicates included. Arrays that are empty
/// under [`is_empty_value`] and non-array input count as zero.
#[must_use]
pub fn selection_count(value: &Value) -> usize {
    match value {
        Value::Array(items) if !is_empty_value(Some(value)) => items.len(),
        _ => 0,
    }
}

/// Coerce a raw value to a finite number
///
/// Accepts JSON numbers and strings that parse as numbers after trimming.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Render a raw value as a plain string
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Distinct selection ids of a raw multi-select value, for display
///
/// Non-array input yields an empty selection. Null and blank members are
/// dropped and duplicates collapse to their first occurrence.
#[must_use]
pub fn selection_ids(value: &Value) -> Vec<String> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    let mut ids: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let id = stringify(item);
        if id.trim().is_empty() || ids.contains(&id) {
            continue;
        }
        ids.push(id);
    }
    ids
}
