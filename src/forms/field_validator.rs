// ABOUTME: Single-field validation dispatched on the registered type tag
// ABOUTME: Returns a structured outcome value; never fails across its contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Field Validation
//!
//! A raw value is checked against the effective constraints of its field:
//!
//! 1. Empty values short-circuit: valid when optional, "required" otherwise.
//! 2. The value is coerced into the [`FieldValue`] variant selected by the tag.
//! 3. The variant is checked against its constraints; the first failing rule wins.

use super::constraints::{ConstraintResolver, FieldConstraints};
use super::registry::FieldRegistry;
use crate::config::UnregisteredFieldPolicy;
use crate::errors::ErrorCode;
use pierre_core::models::{is_empty_value, FieldValue};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Result of validating one field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Whether the value satisfies its constraints
    pub is_valid: bool,
    /// User-facing message when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Error category when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl ValidationOutcome {
    /// Valid outcome
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            code: None,
        }
    }

    /// Invalid outcome with a message
    #[must_use]
    pub fn invalid(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
            code: Some(code),
        }
    }
}

/// Message for an empty required field
pub(crate) fn required_message(label: &str) -> String {
    format!("{label} is required")
}

/// `"1 option"` or `"N options"`
pub(crate) fn options_noun(count: usize) -> String {
    if count == 1 {
        "1 option".to_owned()
    } else {
        format!("{count} options")
    }
}

/// Validates single field values
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator<'a> {
    registry: FieldRegistry<'a>,
    resolver: ConstraintResolver<'a>,
    policy: UnregisteredFieldPolicy,
}

impl<'a> FieldValidator<'a> {
    /// Create a validator
    #[must_use]
    pub const fn new(
        registry: FieldRegistry<'a>,
        resolver: ConstraintResolver<'a>,
        policy: UnregisteredFieldPolicy,
    ) -> Self {
        Self {
            registry,
            resolver,
            policy,
        }
    }

    /// Registry this validator resolves keys through
    #[must_use]
    pub const fn registry(&self) -> FieldRegistry<'a> {
        self.registry
    }

    /// Validate `value` for the field `key`
    #[must_use]
    pub fn validate(&self, key: &str, value: Option<&Value>) -> ValidationOutcome {
        let Some(tag) = self.registry.type_of(key) else {
            return self.unregistered(key);
        };
        let constraints = self.resolver.constraints_of(key, tag);
        check_value(self.registry.label_or_key(key), &constraints, value)
    }

    fn unregistered(&self, key: &str) -> ValidationOutcome {
        match self.policy {
            UnregisteredFieldPolicy::Permissive => {
                debug!(field = %key, "No registered type for field, accepting value");
                ValidationOutcome::valid()
            }
            UnregisteredFieldPolicy::Strict => {
                ValidationOutcome::invalid(ErrorCode::InvalidInput, format!("Unknown field: {key}"))
            }
        }
    }
}

/// Validate a raw value against resolved constraints
#[must_use]
pub fn check_value(
    label: &str,
    constraints: &FieldConstraints,
    value: Option<&Value>,
) -> ValidationOutcome {
    let empty = || {
        if constraints.is_required() {
            ValidationOutcome::invalid(ErrorCode::MissingRequiredField, required_message(label))
        } else {
            ValidationOutcome::valid()
        }
    };

    let Some(raw) = value.filter(|_| !is_empty_value(value)) else {
        return empty();
    };

    let Ok(typed) = FieldValue::from_raw(constraints.tag(), raw) else {
        return ValidationOutcome::invalid(
            ErrorCode::InvalidFormat,
            format!("{label} must be a valid number"),
        );
    };

    match (constraints, typed) {
        (FieldConstraints::Rating { min, max, .. }, FieldValue::Rating(v)) => {
            if v < *min as f64 || v > *max as f64 {
                ValidationOutcome::invalid(
                    ErrorCode::ValueOutOfRange,
                    format!("{label} must be between {min} and {max}"),
                )
            } else {
                ValidationOutcome::valid()
            }
        }
        (FieldConstraints::Duration { min, max, .. }, FieldValue::Duration(v)) => {
            if v < *min as f64 {
                ValidationOutcome::invalid(
                    ErrorCode::ValueOutOfRange,
                    format!("{label} must be at least {min} minutes"),
                )
            } else if v > *max as f64 {
                ValidationOutcome::invalid(
                    ErrorCode::ValueOutOfRange,
                    format!("{label} must be no more than {max} minutes"),
                )
            } else {
                ValidationOutcome::valid()
            }
        }
        (
            FieldConstraints::MultiSelect {
                min_selections,
                max_selections,
                ..
            },
            FieldValue::MultiSelect(ids),
        ) => check_selection_count(ids.len(), *min_selections, *max_selections, empty),
        (
            FieldConstraints::SingleSelect {
                allowed_values: Some(allowed),
                ..
            },
            FieldValue::SingleSelect(id),
        ) => {
            let id = id.trim();
            if allowed.iter().any(|candidate| candidate == id) {
                ValidationOutcome::valid()
            } else {
                ValidationOutcome::invalid(
                    ErrorCode::InvalidInput,
                    format!("{label} has an invalid selection: {id}"),
                )
            }
        }
        (
            FieldConstraints::Text {
                min_length,
                max_length,
                pattern,
                ..
            },
            FieldValue::Text(text),
        ) => {
            let length = text.chars().count();
            if length < *min_length {
                let unit = if *min_length == 1 { "character" } else { "characters" };
                ValidationOutcome::invalid(
                    ErrorCode::ValueOutOfRange,
                    format!("{label} must be at least {min_length} {unit}"),
                )
            } else if length > *max_length {
                ValidationOutcome::invalid(
                    ErrorCode::ValueOutOfRange,
                    format!("{label} must be no more than {max_length} characters"),
                )
            } else if pattern.as_ref().is_some_and(|p| !p.is_match(&text)) {
                ValidationOutcome::invalid(
                    ErrorCode::InvalidFormat,
                    format!("{label} has an invalid format"),
                )
            } else {
                ValidationOutcome::valid()
            }
        }
        _ => ValidationOutcome::valid(),
    }
}

fn check_selection_count(
    count: usize,
    min: Option<usize>,
    max: Option<usize>,
    empty: impl FnOnce() -> ValidationOutcome,
) -> ValidationOutcome {
    // Non-array input coerces to no selection at all
    if count == 0 {
        return empty();
    }
    if let Some(min) = min.filter(|min| count < *min) {
        return ValidationOutcome::invalid(
            ErrorCode::ValueOutOfRange,
            format!("Please select at least {}", options_noun(min)),
        );
    }
    if let Some(max) = max.filter(|max| count > *max) {
        return ValidationOutcome::invalid(
            ErrorCode::ValueOutOfRange,
            format!("Please select no more than {}", options_noun(max)),
        );
    }
    ValidationOutcome::valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::constraints::TextPattern;
    use serde_json::json;

    fn rating() -> FieldConstraints {
        FieldConstraints::Rating {
            min: 1,
            max: 6,
            required: false,
        }
    }

    #[test]
    fn test_empty_short_circuit() {
        assert!(check_value("Energy", &rating(), None).is_valid);
        assert!(check_value("Energy", &rating(), Some(&json!("  "))).is_valid);

        let required = FieldConstraints::Rating {
            min: 1,
            max: 6,
            required: true,
        };
        let outcome = check_value("Energy", &required, Some(&Value::Null));
        assert_eq!(outcome.error.as_deref(), Some("Energy is required"));
        assert_eq!(outcome.code, Some(ErrorCode::MissingRequiredField));
    }

    #[test]
    fn test_numeric_coercion_failure() {
        let outcome = check_value("Energy", &rating(), Some(&json!("high")));
        assert_eq!(outcome.error.as_deref(), Some("Energy must be a valid number"));
        assert!(check_value("Energy", &rating(), Some(&json!(" 4 "))).is_valid);
        assert!(!check_value("Energy", &rating(), Some(&json!(true))).is_valid);
    }

    #[test]
    fn test_zero_is_not_empty() {
        let outcome = check_value("Energy", &rating(), Some(&json!(0)));
        assert_eq!(outcome.error.as_deref(), Some("Energy must be between 1 and 6"));
    }

    #[test]
    fn test_text_length_checked_before_pattern() {
        let constraints = FieldConstraints::Text {
            min_length: 0,
            max_length: 5,
            required: false,
            pattern: Some(TextPattern::new("^[a-z]+$").unwrap()),
        };
        let outcome = check_value("Goals", &constraints, Some(&json!("TOO LONG")));
        assert_eq!(
            outcome.error.as_deref(),
            Some("Goals must be no more than 5 characters")
        );
        let outcome = check_value("Goals", &constraints, Some(&json!("ABC")));
        assert_eq!(outcome.error.as_deref(), Some("Goals has an invalid format"));
    }

    #[test]
    fn test_selection_count_pluralization() {
        let constraints = FieldConstraints::MultiSelect {
            min_selections: Some(2),
            max_selections: Some(1),
            required: false,
        };
        let outcome = check_value("Types", &constraints, Some(&json!(["yoga"])));
        assert_eq!(
            outcome.error.as_deref(),
            Some("Please select at least 2 options")
        );
        let capped = FieldConstraints::MultiSelect {
            min_selections: None,
            max_selections: Some(1),
            required: false,
        };
        let outcome = check_value("Types", &capped, Some(&json!(["yoga", "hiit"])));
        assert_eq!(
            outcome.error.as_deref(),
            Some("Please select no more than 1 option")
        );
    }

    #[test]
    fn test_non_array_multi_select_is_empty_selection() {
        let constraints = FieldConstraints::MultiSelect {
            min_selections: Some(1),
            max_selections: None,
            required: false,
        };
        assert!(check_value("Types", &constraints, Some(&json!("yoga"))).is_valid);
    }
}
