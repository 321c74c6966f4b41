// ABOUTME: Step validation combining required, optional, and progressive group policies
// ABOUTME: Hard errors block progression; warnings and suggestions never do
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Step Validation
//!
//! A step is validated in four passes, in this order:
//!
//! 1. Required fields: empty is an error, otherwise the field rules apply.
//! 2. Optional fields: validated only when filled.
//! 3. Progressive groups: a partly filled group yields one warning per missing
//!    member and one suggestion sentence. Filled members are still validated.
//! 4. Step ceilings: step-local selection caps applied last.

use super::field_validator::{options_noun, required_message, FieldValidator};
use crate::config::{ProgressiveGroup, StepCatalog, StepConfig};
use crate::errors::{AppError, AppResult, ErrorCode};
use pierre_core::models::{is_empty_value, selection_count, RawValues};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Outcome of validating a whole step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether no hard errors were recorded
    pub is_valid: bool,
    /// Hard errors keyed by field
    pub errors: HashMap<String, String>,
    /// Non-blocking guidance keyed by field
    pub warnings: HashMap<String, String>,
    /// Step-level hints
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    /// Create a new, valid result
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
            warnings: HashMap::new(),
            suggestions: Vec::new(),
        }
    }

    /// Record a hard error; the first error recorded for a field is kept
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_owned())
            .or_insert_with(|| message.into());
        self.is_valid = false;
    }

    /// Record a warning
    pub fn add_warning(&mut self, field: &str, message: impl Into<String>) {
        self.warnings
            .entry(field.to_owned())
            .or_insert_with(|| message.into());
    }

    /// Record a suggestion
    pub fn add_suggestion(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    /// Error recorded for `field`, if any
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Convert a failed result into an error carrying the per-field messages
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] with [`ErrorCode::InvalidInput`] when any hard
    /// error was recorded
    pub fn ensure_valid(&self) -> AppResult<()> {
        if self.is_valid {
            return Ok(());
        }
        let noun = if self.errors.len() == 1 { "field" } else { "fields" };
        Err(AppError::new(
            ErrorCode::InvalidInput,
            format!("{} {noun} failed validation", self.errors.len()),
        )
        .with_details(json!({ "errors": self.errors })))
    }
}

/// Join phrases as `a`, `a and b`, or `a, b, and c`
fn join_phrases(phrases: &[String]) -> String {
    match phrases {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

/// Validates named wizard steps
#[derive(Debug, Clone, Copy)]
pub struct StepValidator<'a> {
    steps: &'a StepCatalog,
    fields: FieldValidator<'a>,
}

impl<'a> StepValidator<'a> {
    /// Create a step validator
    #[must_use]
    pub const fn new(steps: &'a StepCatalog, fields: FieldValidator<'a>) -> Self {
        Self { steps, fields }
    }

    /// Validate the step `name` against `values`
    ///
    /// An undeclared step has no fields and is therefore valid.
    #[must_use]
    pub fn validate_step(&self, name: &str, values: &RawValues) -> ValidationResult {
        let Some(step) = self.steps.step(name) else {
            warn!(step = %name, "Validation requested for undeclared step");
            return ValidationResult::new();
        };
        self.validate_config(step, values)
    }

    /// Validate an explicit step declaration against `values`
    #[must_use]
    pub fn validate_config(&self, step: &StepConfig, values: &RawValues) -> ValidationResult {
        let registry = self.fields.registry();
        let mut result = ValidationResult::new();
        let mut checked: HashSet<&str> = HashSet::new();

        for key in &step.required_fields {
            let value = values.get(key);
            if is_empty_value(value) {
                result.add_error(key, required_message(registry.label_or_key(key)));
            } else {
                self.check_field(key, value, &mut result);
            }
            checked.insert(key);
        }

        for key in &step.optional_fields {
            let value = values.get(key);
            if !is_empty_value(value) && checked.insert(key) {
                self.check_field(key, value, &mut result);
            }
        }

        for group in &step.progressive_groups {
            self.check_group(group, values, &mut checked, &mut result);
        }

        for ceiling in &step.ceilings {
            let count = values.get(&ceiling.field).map_or(0, selection_count);
            if count > ceiling.max_selections {
                result.add_error(
                    &ceiling.field,
                    format!(
                        "Please select no more than {} in this step",
                        options_noun(ceiling.max_selections)
                    ),
                );
            }
        }

        result
    }

    fn check_field(&self, key: &str, value: Option<&Value>, result: &mut ValidationResult) {
        let outcome = self.fields.validate(key, value);
        if let Some(message) = outcome.error.filter(|_| !outcome.is_valid) {
            result.add_error(key, message);
        }
    }

    fn check_group<'s>(
        &self,
        group: &'s ProgressiveGroup,
        values: &RawValues,
        checked: &mut HashSet<&'s str>,
        result: &mut ValidationResult,
    ) {
        let (filled, missing): (Vec<&String>, Vec<&String>) = group
            .fields
            .iter()
            .partition(|key| !is_empty_value(values.get(key.as_str())));

        for &key in &filled {
            if checked.insert(key.as_str()) {
                self.check_field(key, values.get(key.as_str()), result);
            }
        }

        if filled.is_empty() || missing.is_empty() {
            return;
        }

        let registry = self.fields.registry();
        let mut phrases = Vec::with_capacity(missing.len());
        for key in missing {
            let label = registry.label_or_key(key);
            result.add_warning(
                key,
                format!("{label} helps complete the {} section", group.name),
            );
            phrases.push(label.to_lowercase());
        }
        result.add_suggestion(format!(
            "Consider also sharing your {} for a more personalized workout",
            join_phrases(&phrases)
        ));
    }
}
