// ABOUTME: Gating-field selection state used to enable buttons and drive progress bars
// ABOUTME: Recomputed from raw values on every change; never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::completion::percentage;
use super::step_validator::StepValidator;
use crate::config::StepCatalog;
use pierre_core::models::{is_empty_value, RawValues};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Progress of a step's gating fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSelectionState {
    /// Gating fields currently filled
    pub total: usize,
    /// Gating fields declared for the step
    pub required: usize,
    /// `total` over `required` as a rounded percentage
    pub percentage: u8,
    /// No gating field is filled
    pub is_empty: bool,
    /// Some but not all gating fields are filled
    pub is_partial: bool,
    /// Every gating field is filled and the step has no hard errors
    pub is_complete: bool,
    /// Whether the user may move past the step
    pub can_proceed: bool,
    /// Filled flag per gating field
    pub details: HashMap<String, bool>,
}

/// Derives [`StepSelectionState`] from values and step validation
#[derive(Debug, Clone, Copy)]
pub struct SelectionStateDeriver<'a> {
    steps: &'a StepCatalog,
    validator: StepValidator<'a>,
}

impl<'a> SelectionStateDeriver<'a> {
    /// Create a deriver
    #[must_use]
    pub const fn new(steps: &'a StepCatalog, validator: StepValidator<'a>) -> Self {
        Self { steps, validator }
    }

    /// Selection state of the step `name`
    #[must_use]
    pub fn step_selection_state(&self, name: &str, values: &RawValues) -> StepSelectionState {
        let gating: &[String] = self.steps.step(name).map_or_else(
            || {
                warn!(step = %name, "Selection state requested for undeclared step");
                &[][..]
            },
            |step| step.gating_fields.as_slice(),
        );

        let details: HashMap<String, bool> = gating
            .iter()
            .map(|key| (key.clone(), !is_empty_value(values.get(key))))
            .collect();
        let total = details.values().filter(|filled| **filled).count();
        let required = details.len();
        let no_errors = self.validator.validate_step(name, values).is_valid;
        let is_complete = total == required && no_errors;

        StepSelectionState {
            total,
            required,
            percentage: percentage(total, required),
            is_empty: required > 0 && total == 0,
            is_partial: total > 0 && total < required,
            is_complete,
            can_proceed: is_complete,
            details,
        }
    }
}
