// ABOUTME: Form engine facade owning the immutable catalogs and exposing the wizard contracts
// ABOUTME: validate, validate_step, completion, format, and selection state over borrowed components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Form Engine
//!
//! [`FormEngine`] is constructed once at process start. Every call borrows the
//! catalogs, builds the lightweight component it needs, and recomputes from its
//! arguments, so concurrent calls from any number of threads are independent.
//!
//! ```rust,no_run
//! use pierre_wizard_engine::forms::FormEngine;
//! use pierre_wizard_engine::models::RawValues;
//! use serde_json::json;
//!
//! # fn main() -> pierre_wizard_engine::errors::AppResult<()> {
//! let engine = FormEngine::with_defaults()?;
//! let mut values = RawValues::new();
//! values.insert("duration".into(), json!(90));
//!
//! assert!(engine.validate("duration", values.get("duration")).is_valid);
//! assert_eq!(engine.format("duration", values.get("duration")).as_deref(), Some("1h 30m"));
//! # Ok(())
//! # }
//! ```

use super::completion::CompletionCalculator;
use super::constraints::{ConstraintResolver, FieldConstraints};
use super::field_validator::{FieldValidator, ValidationOutcome};
use super::registry::FieldRegistry;
use super::selection_formatter::SelectionFormatter;
use super::selection_state::{SelectionStateDeriver, StepSelectionState};
use super::step_validator::{StepValidator, ValidationResult};
use crate::config::{DisplayCatalog, EngineConfig, FieldCatalog, StepCatalog};
use crate::errors::AppResult;
use pierre_core::models::{is_empty_value, RawValues};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

/// One rendered field for a summary view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionBadge {
    /// Field key
    pub field: String,
    /// Human label of the field
    pub label: String,
    /// Rendered value
    pub display: String,
}

/// The wizard's validation and completion engine
#[derive(Debug, Clone)]
pub struct FormEngine {
    config: EngineConfig,
    fields: FieldCatalog,
    steps: StepCatalog,
    display: DisplayCatalog,
}

impl FormEngine {
    /// Build the engine with the built-in catalogs
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is out of range or the built-in
    /// catalogs fail validation
    pub fn new(config: EngineConfig) -> AppResult<Self> {
        config.validate()?;
        let fields = FieldCatalog::default_catalog(config.max_session_minutes)?;
        Self::with_catalogs(
            config,
            fields,
            StepCatalog::default_catalog(),
            DisplayCatalog::default_catalog(),
        )
    }

    /// Build the engine with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalogs fail validation
    pub fn with_defaults() -> AppResult<Self> {
        Self::new(EngineConfig::default())
    }

    /// Build the engine from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is malformed or out of range
    pub fn from_env() -> AppResult<Self> {
        Self::new(EngineConfig::from_env()?)
    }

    /// Build the engine from explicit catalogs
    ///
    /// # Errors
    ///
    /// Returns an error if a step references a field the catalog does not register
    pub fn with_catalogs(
        config: EngineConfig,
        fields: FieldCatalog,
        steps: StepCatalog,
        display: DisplayCatalog,
    ) -> AppResult<Self> {
        steps.check_fields(&fields)?;
        info!(
            fields = fields.definitions().len(),
            steps = steps.steps().len(),
            unregistered_fields = %config.unregistered_fields,
            max_session_minutes = config.max_session_minutes,
            "Wizard form engine initialized"
        );
        Ok(Self {
            config,
            fields,
            steps,
            display,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Field catalog
    #[must_use]
    pub const fn field_catalog(&self) -> &FieldCatalog {
        &self.fields
    }

    /// Step catalog
    #[must_use]
    pub const fn step_catalog(&self) -> &StepCatalog {
        &self.steps
    }

    /// Field key registry
    #[must_use]
    pub const fn registry(&self) -> FieldRegistry<'_> {
        FieldRegistry::new(&self.fields)
    }

    /// Constraint resolver
    #[must_use]
    pub const fn resolver(&self) -> ConstraintResolver<'_> {
        ConstraintResolver::new(&self.fields)
    }

    /// Single-field validator
    #[must_use]
    pub const fn field_validator(&self) -> FieldValidator<'_> {
        FieldValidator::new(
            self.registry(),
            self.resolver(),
            self.config.unregistered_fields,
        )
    }

    /// Step validator
    #[must_use]
    pub const fn step_validator(&self) -> StepValidator<'_> {
        StepValidator::new(&self.steps, self.field_validator())
    }

    /// Completion calculator
    #[must_use]
    pub const fn completion(&self) -> CompletionCalculator<'_> {
        CompletionCalculator::new(&self.steps)
    }

    /// Selection formatter
    #[must_use]
    pub const fn formatter(&self) -> SelectionFormatter<'_> {
        SelectionFormatter::new(self.registry(), self.resolver(), &self.display)
    }

    /// Selection state deriver
    #[must_use]
    pub const fn selection_state(&self) -> SelectionStateDeriver<'_> {
        SelectionStateDeriver::new(&self.steps, self.step_validator())
    }

    /// Validate one field value
    #[must_use]
    pub fn validate(&self, key: &str, value: Option<&Value>) -> ValidationOutcome {
        self.field_validator().validate(key, value)
    }

    /// Validate a step
    #[must_use]
    pub fn validate_step(&self, name: &str, values: &RawValues) -> ValidationResult {
        self.step_validator().validate_step(name, values)
    }

    /// Completion percentage of a step
    #[must_use]
    pub fn step_completion(&self, name: &str, values: &RawValues) -> u8 {
        self.completion().step_completion(name, values)
    }

    /// Completion percentage of the whole wizard
    #[must_use]
    pub fn overall_completion(&self, values: &RawValues) -> u8 {
        self.completion().overall_completion(values)
    }

    /// Display string for a field value
    #[must_use]
    pub fn format(&self, key: &str, value: Option<&Value>) -> Option<String> {
        self.formatter().format(key, value)
    }

    /// Gating-field selection state of a step
    #[must_use]
    pub fn step_selection_state(&self, name: &str, values: &RawValues) -> StepSelectionState {
        self.selection_state().step_selection_state(name, values)
    }

    /// Effective constraints of a registered field
    #[must_use]
    pub fn constraints_of(&self, key: &str) -> Option<FieldConstraints> {
        self.registry()
            .type_of(key)
            .map(|tag| self.resolver().constraints_of(key, tag))
    }

    /// Declared step names in wizard order
    #[must_use]
    pub fn step_names(&self) -> Vec<&str> {
        self.steps
            .steps()
            .iter()
            .map(|step| step.name.as_str())
            .collect()
    }

    /// Human label of a registered field
    #[must_use]
    pub fn field_label(&self, key: &str) -> Option<&str> {
        self.registry().label(key)
    }

    /// Validate every declared step
    #[must_use]
    pub fn validate_all(&self, values: &RawValues) -> HashMap<String, ValidationResult> {
        let validator = self.step_validator();
        self.steps
            .steps()
            .iter()
            .map(|step| (step.name.clone(), validator.validate_config(step, values)))
            .collect()
    }

    /// First step, in wizard order, whose gating state does not allow proceeding
    #[must_use]
    pub fn first_incomplete_step(&self, values: &RawValues) -> Option<&str> {
        let deriver = self.selection_state();
        self.steps
            .steps()
            .iter()
            .find(|step| !deriver.step_selection_state(&step.name, values).can_proceed)
            .map(|step| step.name.as_str())
    }

    /// Rendered badges for every filled field, in registration order
    #[must_use]
    pub fn summarize(&self, values: &RawValues) -> Vec<SelectionBadge> {
        let formatter = self.formatter();
        self.fields
            .definitions()
            .iter()
            .filter(|definition| !is_empty_value(values.get(&definition.key)))
            .filter_map(|definition| {
                formatter
                    .format(&definition.key, values.get(&definition.key))
                    .map(|display| SelectionBadge {
                        field: definition.key.clone(),
                        label: definition.label.clone(),
                        display,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_out_of_range_config_is_rejected() {
        let config = EngineConfig {
            max_session_minutes: 400,
            ..EngineConfig::default()
        };
        let error = FormEngine::new(config).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_session_bound_flows_into_duration_constraints() {
        let config = EngineConfig {
            max_session_minutes: 90,
            ..EngineConfig::default()
        };
        let engine = FormEngine::new(config).unwrap();
        assert_eq!(
            engine
                .constraints_of("duration")
                .and_then(|c| c.numeric_bounds()),
            Some((10, 90))
        );
    }
}
