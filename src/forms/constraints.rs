// ABOUTME: Field constraint records and the resolver that layers per-field overrides on type defaults
// ABOUTME: Produces the effective constraint set the field validator and formatter work from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Field Constraint Resolution
//!
//! Every type tag has one row of default constraints. A field may carry an
//! override record whose set keys replace the matching default values. An
//! override never removes a default key: an unset override key leaves the
//! default untouched, and keys that do not apply to the field's tag are ignored.

use crate::config::FieldCatalog;
use crate::errors::ConfigError;
use pierre_core::constants::limits;
use pierre_core::models::FieldTypeTag;
use regex::Regex;
use serde::{Serialize, Serializer};

/// Compiled text pattern constraint, anchored to the whole value
#[derive(Debug, Clone)]
pub struct TextPattern {
    source: String,
    regex: Regex,
}

impl TextPattern {
    /// Compile a pattern that must match the entire value
    ///
    /// # Errors
    ///
    /// Returns the regex compiler error when `source` is not a valid pattern
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            source: source.to_owned(),
            regex: Regex::new(&format!("^(?:{source})$"))?,
        })
    }

    /// Pattern source text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether all of `text` matches the pattern
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for TextPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for TextPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Effective constraints for one field, keyed by type tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldConstraints {
    /// Inclusive integer scale
    Rating {
        /// Lowest accepted rating
        min: i64,
        /// Highest accepted rating
        max: i64,
        /// Whether an empty value is an error
        required: bool,
    },
    /// Selection count bounds
    MultiSelect {
        /// Fewest accepted selections, if bounded
        min_selections: Option<usize>,
        /// Most accepted selections, if bounded
        max_selections: Option<usize>,
        /// Whether an empty selection is an error
        required: bool,
    },
    /// Membership constraint
    SingleSelect {
        /// Whether an empty value is an error
        required: bool,
        /// Accepted ids; any non-empty id is accepted when absent
        allowed_values: Option<Vec<String>>,
    },
    /// Inclusive bounds in minutes
    Duration {
        /// Shortest accepted duration
        min: i64,
        /// Longest accepted duration
        max: i64,
        /// Whether an empty value is an error
        required: bool,
    },
    /// Length and pattern bounds
    Text {
        /// Fewest accepted characters
        min_length: usize,
        /// Most accepted characters
        max_length: usize,
        /// Whether an empty value is an error
        required: bool,
        /// Pattern the whole value must match, if set
        pattern: Option<TextPattern>,
    },
}

impl FieldConstraints {
    /// Built-in default row for a tag
    #[must_use]
    pub const fn type_default(tag: FieldTypeTag) -> Self {
        match tag {
            FieldTypeTag::Rating => Self::Rating {
                min: limits::RATING_MIN,
                max: limits::RATING_MAX,
                required: false,
            },
            FieldTypeTag::MultiSelect => Self::MultiSelect {
                min_selections: None,
                max_selections: None,
                required: false,
            },
            FieldTypeTag::SingleSelect => Self::SingleSelect {
                required: false,
                allowed_values: None,
            },
            FieldTypeTag::Duration => Self::Duration {
                min: limits::DURATION_MIN_MINUTES,
                max: limits::DURATION_MAX_MINUTES,
                required: false,
            },
            FieldTypeTag::Text => Self::Text {
                min_length: 0,
                max_length: limits::TEXT_MAX_LENGTH,
                required: false,
                pattern: None,
            },
        }
    }

    /// Tag these constraints belong to
    #[must_use]
    pub const fn tag(&self) -> FieldTypeTag {
        match self {
            Self::Rating { .. } => FieldTypeTag::Rating,
            Self::MultiSelect { .. } => FieldTypeTag::MultiSelect,
            Self::SingleSelect { .. } => FieldTypeTag::SingleSelect,
            Self::Duration { .. } => FieldTypeTag::Duration,
            Self::Text { .. } => FieldTypeTag::Text,
        }
    }

    /// Whether an empty value violates these constraints
    #[must_use]
    pub const fn is_required(&self) -> bool {
        match self {
            Self::Rating { required, .. }
            | Self::MultiSelect { required, .. }
            | Self::SingleSelect { required, .. }
            | Self::Duration { required, .. }
            | Self::Text { required, .. } => *required,
        }
    }

    /// Inclusive bounds of a rating or duration scale
    #[must_use]
    pub const fn numeric_bounds(&self) -> Option<(i64, i64)> {
        match self {
            Self::Rating { min, max, .. } | Self::Duration { min, max, .. } => Some((*min, *max)),
            _ => None,
        }
    }

    /// Check that lower bounds do not exceed upper bounds
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] naming `field` when a pair of bounds is inverted
    pub fn check_bounds(&self, field: &str) -> Result<(), ConfigError> {
        let inverted = |min: i64, max: i64| ConfigError::InvalidRange {
            field: field.to_owned(),
            min,
            max,
        };
        match self {
            Self::Rating { min, max, .. } | Self::Duration { min, max, .. } if min > max => {
                Err(inverted(*min, *max))
            }
            Self::MultiSelect {
                min_selections: Some(min),
                max_selections: Some(max),
                ..
            }
            | Self::Text {
                min_length: min,
                max_length: max,
                ..
            } if min > max => Err(inverted(*min as i64, *max as i64)),
            _ => Ok(()),
        }
    }
}

/// Per-field override record; only set keys replace defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintOverride {
    /// Rating or duration lower bound
    pub min: Option<i64>,
    /// Rating or duration upper bound
    pub max: Option<i64>,
    /// Required flag for any tag
    pub required: Option<bool>,
    /// Multi-select lower count bound
    pub min_selections: Option<usize>,
    /// Multi-select upper count bound
    pub max_selections: Option<usize>,
    /// Single-select accepted ids
    pub allowed_values: Option<Vec<String>>,
    /// Text lower length bound
    pub min_length: Option<usize>,
    /// Text upper length bound
    pub max_length: Option<usize>,
    /// Text pattern
    pub pattern: Option<TextPattern>,
}

impl ConstraintOverride {
    /// Override the lower numeric bound
    #[must_use]
    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Override the upper numeric bound
    #[must_use]
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Override the required flag
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Override the lower selection count bound
    #[must_use]
    pub fn with_min_selections(mut self, min: usize) -> Self {
        self.min_selections = Some(min);
        self
    }

    /// Override the upper selection count bound
    #[must_use]
    pub fn with_max_selections(mut self, max: usize) -> Self {
        self.max_selections = Some(max);
        self
    }

    /// Override the accepted single-select ids
    #[must_use]
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Override the lower text length bound
    #[must_use]
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Override the upper text length bound
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Override the text pattern
    #[must_use]
    pub fn with_pattern(mut self, pattern: TextPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Overlay this record onto `base`
    #[must_use]
    pub fn apply(&self, base: &FieldConstraints) -> FieldConstraints {
        match base.clone() {
            FieldConstraints::Rating { min, max, required } => FieldConstraints::Rating {
                min: self.min.unwrap_or(min),
                max: self.max.unwrap_or(max),
                required: self.required.unwrap_or(required),
            },
            FieldConstraints::Duration { min, max, required } => FieldConstraints::Duration {
                min: self.min.unwrap_or(min),
                max: self.max.unwrap_or(max),
                required: self.required.unwrap_or(required),
            },
            FieldConstraints::MultiSelect {
                min_selections,
                max_selections,
                required,
            } => FieldConstraints::MultiSelect {
                min_selections: self.min_selections.or(min_selections),
                max_selections: self.max_selections.or(max_selections),
                required: self.required.unwrap_or(required),
            },
            FieldConstraints::SingleSelect {
                required,
                allowed_values,
            } => FieldConstraints::SingleSelect {
                required: self.required.unwrap_or(required),
                allowed_values: self.allowed_values.clone().or(allowed_values),
            },
            FieldConstraints::Text {
                min_length,
                max_length,
                required,
                pattern,
            } => FieldConstraints::Text {
                min_length: self.min_length.unwrap_or(min_length),
                max_length: self.max_length.unwrap_or(max_length),
                required: self.required.unwrap_or(required),
                pattern: self.pattern.clone().or(pattern),
            },
        }
    }

    /// Keys set on this record that have no meaning for `tag`
    #[must_use]
    pub fn ignored_keys(&self, tag: FieldTypeTag) -> Vec<&'static str> {
        let set = [
            ("min", self.min.is_some(), tag.is_numeric()),
            ("max", self.max.is_some(), tag.is_numeric()),
            (
                "min_selections",
                self.min_selections.is_some(),
                tag == FieldTypeTag::MultiSelect,
            ),
            (
                "max_selections",
                self.max_selections.is_some(),
                tag == FieldTypeTag::MultiSelect,
            ),
            (
                "allowed_values",
                self.allowed_values.is_some(),
                tag == FieldTypeTag::SingleSelect,
            ),
            ("min_length", self.min_length.is_some(), tag == FieldTypeTag::Text),
            ("max_length", self.max_length.is_some(), tag == FieldTypeTag::Text),
            ("pattern", self.pattern.is_some(), tag == FieldTypeTag::Text),
        ];
        set.into_iter()
            .filter(|(_, is_set, applies)| *is_set && !applies)
            .map(|(key, _, _)| key)
            .collect()
    }
}

/// Resolves the effective constraints of a field from the catalog tables
#[derive(Debug, Clone, Copy)]
pub struct ConstraintResolver<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> ConstraintResolver<'a> {
    /// Create a resolver over a field catalog
    #[must_use]
    pub const fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Effective constraints for `key` under `tag`
    #[must_use]
    pub fn constraints_of(&self, key: &str, tag: FieldTypeTag) -> FieldConstraints {
        self.catalog.override_for(key).map_or_else(
            || self.catalog.type_default(tag),
            |overrides| overrides.apply(&self.catalog.type_default(tag)),
        )
    }
}
