// ABOUTME: Renders raw field values into badge and summary strings per type tag
// ABOUTME: Independent of validity; internal failures are logged and rendered as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Selection Formatting
//!
//! | tag | rendering |
//! |---|---|
//! | duration | `45 min`, `1 hour`, `2 hours`, `1h 30m` |
//! | rating | `Moderate (4/6)` from the field's own label table |
//! | multi-select | single display name, or `3 types selected` |
//! | single-select | curated name or mechanical Title Case |
//! | text | single comma token, or `3 goals` |

use super::constraints::ConstraintResolver;
use super::registry::FieldRegistry;
use crate::config::DisplayCatalog;
use pierre_core::constants::limits::MINUTES_PER_HOUR;
use pierre_core::models::{coerce_number, is_empty_value, selection_ids, stringify, FieldTypeTag};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Internal formatting failure, never surfaced to callers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Numeric field held a value that is not a finite number
    #[error("field {field} holds a non-numeric value: {raw}")]
    NotNumeric {
        /// Field key
        field: String,
        /// Stringified raw value
        raw: String,
    },
    /// Duration field held a negative number of minutes
    #[error("field {field} holds a negative duration: {minutes}")]
    NegativeDuration {
        /// Field key
        field: String,
        /// Raw minutes
        minutes: f64,
    },
    /// Rating field resolved to a scale without numeric bounds
    #[error("field {field} has no numeric bounds")]
    MissingBounds {
        /// Field key
        field: String,
    },
}

/// Formats raw values for display
#[derive(Debug, Clone, Copy)]
pub struct SelectionFormatter<'a> {
    registry: FieldRegistry<'a>,
    resolver: ConstraintResolver<'a>,
    display: &'a DisplayCatalog,
}

impl<'a> SelectionFormatter<'a> {
    /// Create a formatter
    #[must_use]
    pub const fn new(
        registry: FieldRegistry<'a>,
        resolver: ConstraintResolver<'a>,
        display: &'a DisplayCatalog,
    ) -> Self {
        Self {
            registry,
            resolver,
            display,
        }
    }

    /// Display string for `value` of field `key`, or `None` when nothing should be shown
    #[must_use]
    pub fn format(&self, key: &str, value: Option<&Value>) -> Option<String> {
        let Some(tag) = self.registry.type_of(key) else {
            debug!(field = %key, "No registered type for field, nothing to format");
            return None;
        };
        self.try_format(key, tag, value).unwrap_or_else(|e| {
            warn!(field = %key, error = %e, "Failed to format field value");
            None
        })
    }

    /// Display string for `value`, surfacing internal failures
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when a numeric field cannot be rendered
    pub fn try_format(
        &self,
        key: &str,
        tag: FieldTypeTag,
        value: Option<&Value>,
    ) -> Result<Option<String>, FormatError> {
        let raw = match value {
            Some(raw) if !is_empty_value(value) => raw,
            _ if tag == FieldTypeTag::MultiSelect => {
                return Ok(self.display.empty_sentinel(key).map(str::to_owned))
            }
            _ => return Ok(None),
        };

        match tag {
            FieldTypeTag::Duration => format_duration(key, raw).map(Some),
            FieldTypeTag::Rating => self.format_rating(key, raw),
            FieldTypeTag::MultiSelect => Ok(self.format_selections(key, raw)),
            FieldTypeTag::SingleSelect => {
                let id = stringify(raw);
                Ok(Some(self.display.display_name(id.trim())))
            }
            FieldTypeTag::Text => Ok(self.format_text_list(key, raw)),
        }
    }

    fn format_rating(&self, key: &str, raw: &Value) -> Result<Option<String>, FormatError> {
        let rating = number(key, raw)?;
        let (min, max) = self
            .resolver
            .constraints_of(key, FieldTypeTag::Rating)
            .numeric_bounds()
            .ok_or_else(|| FormatError::MissingBounds {
                field: key.to_owned(),
            })?;

        if rating.fract().abs() > f64::EPSILON {
            return Ok(None);
        }
        let rating = rating as i64;

        let Some(labels) = self.display.rating_labels(key) else {
            return Ok((min..=max)
                .contains(&rating)
                .then(|| format!("{rating}/{max}")));
        };

        let label = usize::try_from(rating - min)
            .ok()
            .and_then(|index| labels.get(index));
        Ok(label.map(|label| format!("{label} ({rating}/{max})")))
    }

    fn format_selections(&self, key: &str, raw: &Value) -> Option<String> {
        let ids = selection_ids(raw);
        match ids.as_slice() {
            [] => self.display.empty_sentinel(key).map(str::to_owned),
            [only] => Some(self.display.display_name(only)),
            _ => Some(format!(
                "{} {} selected",
                ids.len(),
                self.display.selection_unit(key)
            )),
        }
    }

    fn format_text_list(&self, key: &str, raw: &Value) -> Option<String> {
        let text = stringify(raw);
        let tokens: Vec<&str> = text
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();
        match tokens.as_slice() {
            [] => None,
            [only] => Some((*only).to_owned()),
            _ => Some(format!("{} {}", tokens.len(), self.display.text_noun(key))),
        }
    }
}

fn number(key: &str, raw: &Value) -> Result<f64, FormatError> {
    coerce_number(raw).ok_or_else(|| FormatError::NotNumeric {
        field: key.to_owned(),
        raw: stringify(raw),
    })
}

fn format_duration(key: &str, raw: &Value) -> Result<String, FormatError> {
    let minutes = number(key, raw)?;
    if minutes < 0.0 {
        return Err(FormatError::NegativeDuration {
            field: key.to_owned(),
            minutes,
        });
    }
    Ok(duration_label(minutes.round() as i64))
}

/// Bucketed duration label for a whole number of minutes
#[must_use]
pub fn duration_label(minutes: i64) -> String {
    if minutes < MINUTES_PER_HOUR {
        return format!("{minutes} min");
    }
    let hours = minutes / MINUTES_PER_HOUR;
    let remainder = minutes % MINUTES_PER_HOUR;
    match (hours, remainder) {
        (1, 0) => "1 hour".to_owned(),
        (_, 0) => format!("{hours} hours"),
        _ => format!("{hours}h {remainder}m"),
    }
}
