// ABOUTME: Wizard step declarations: required, optional, progressive groups, ceilings, and gating fields
// ABOUTME: Declared once per step name and shared by the step validator, completion, and selection state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Step catalog for the workout-customization wizard

use super::FieldCatalog;
use crate::errors::ConfigError;
use pierre_core::constants::{fields, steps};
use serde::Serialize;

/// Cluster of related optional fields encouraged together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressiveGroup {
    /// Group name used in guidance messages
    pub name: String,
    /// Member field keys in declared order
    pub fields: Vec<String>,
}

/// Step-local cap on a multi-select, tighter than the field's own constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepCeiling {
    /// Multi-select field key
    pub field: String,
    /// Most selections accepted within this step
    pub max_selections: usize,
}

/// Field groupings for one wizard step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepConfig {
    /// Step name
    pub name: String,
    /// Fields that must be filled and valid
    pub required_fields: Vec<String>,
    /// Fields validated only when filled
    pub optional_fields: Vec<String>,
    /// Soft-validated clusters
    pub progressive_groups: Vec<ProgressiveGroup>,
    /// Step-local selection caps, applied after field validation
    pub ceilings: Vec<StepCeiling>,
    /// Minimal subset whose completeness decides whether the user may proceed
    pub gating_fields: Vec<String>,
}

impl StepConfig {
    /// Start declaring a step
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            required_fields: Vec::new(),
            optional_fields: Vec::new(),
            progressive_groups: Vec::new(),
            ceilings: Vec::new(),
            gating_fields: Vec::new(),
        }
    }

    /// Declare required fields
    #[must_use]
    pub fn required(mut self, keys: &[&str]) -> Self {
        self.required_fields.extend(keys.iter().map(|k| (*k).to_owned()));
        self
    }

    /// Declare optional fields
    #[must_use]
    pub fn optional(mut self, keys: &[&str]) -> Self {
        self.optional_fields.extend(keys.iter().map(|k| (*k).to_owned()));
        self
    }

    /// Declare a progressive group
    #[must_use]
    pub fn group(mut self, name: &str, keys: &[&str]) -> Self {
        self.progressive_groups.push(ProgressiveGroup {
            name: name.to_owned(),
            fields: keys.iter().map(|k| (*k).to_owned()).collect(),
        });
        self
    }

    /// Declare a step-local selection cap
    #[must_use]
    pub fn ceiling(mut self, key: &str, max_selections: usize) -> Self {
        self.ceilings.push(StepCeiling {
            field: key.to_owned(),
            max_selections,
        });
        self
    }

    /// Declare the gating subset
    #[must_use]
    pub fn gating(mut self, keys: &[&str]) -> Self {
        self.gating_fields.extend(keys.iter().map(|k| (*k).to_owned()));
        self
    }

    /// Every field declared for the step, deduplicated, in declaration order
    ///
    /// Required fields come first, then optional fields, then progressive group
    /// members not already listed.
    #[must_use]
    pub fn declared_fields(&self) -> Vec<&str> {
        let mut declared: Vec<&str> = Vec::new();
        let candidates = self
            .required_fields
            .iter()
            .chain(&self.optional_fields)
            .chain(self.progressive_groups.iter().flat_map(|g| &g.fields))
            .chain(self.ceilings.iter().map(|c| &c.field))
            .chain(&self.gating_fields);
        for key in candidates {
            if !declared.contains(&key.as_str()) {
                declared.push(key.as_str());
            }
        }
        declared
    }
}

/// Immutable step declarations in wizard order
#[derive(Debug, Clone, Default, Serialize)]
pub struct StepCatalog {
    steps: Vec<StepConfig>,
}

impl StepCatalog {
    /// Catalog from explicit step declarations
    #[must_use]
    pub fn new(steps: Vec<StepConfig>) -> Self {
        Self { steps }
    }

    /// The wizard's three customization steps
    #[must_use]
    pub fn default_catalog() -> Self {
        Self::new(vec![
            StepConfig::new(steps::FOCUS)
                .optional(&[
                    fields::FOCUS,
                    fields::ENERGY,
                    fields::SLEEP,
                    fields::STRESS,
                    fields::SORENESS_AREAS,
                ])
                .group(
                    steps::GROUP_WELLNESS,
                    &[fields::ENERGY, fields::SLEEP, fields::STRESS],
                )
                .gating(&[fields::FOCUS, fields::ENERGY]),
            StepConfig::new(steps::SESSION)
                .required(&[fields::DURATION])
                .optional(&[fields::WORKOUT_TYPES, fields::EQUIPMENT, fields::LOCATION])
                .ceiling(fields::WORKOUT_TYPES, 3)
                .gating(&[fields::DURATION, fields::WORKOUT_TYPES]),
            StepConfig::new(steps::PREFERENCES)
                .optional(&[fields::GOALS, fields::LIMITATIONS, fields::NOTES])
                .group(steps::GROUP_PERSONAL, &[fields::GOALS, fields::LIMITATIONS])
                .gating(&[fields::GOALS]),
        ])
    }

    /// Declaration for `name`, if any
    #[must_use]
    pub fn step(&self, name: &str) -> Option<&StepConfig> {
        self.steps.iter().find(|step| step.name == name)
    }

    /// All declarations in wizard order
    #[must_use]
    pub fn steps(&self) -> &[StepConfig] {
        &self.steps
    }

    /// Check that every field a step mentions is registered
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStepField`] for the first unregistered field
    pub fn check_fields(&self, catalog: &FieldCatalog) -> Result<(), ConfigError> {
        for step in &self.steps {
            if let Some(missing) = step
                .declared_fields()
                .into_iter()
                .find(|key| catalog.definition(key).is_none())
            {
                return Err(ConfigError::UnknownStepField {
                    step: step.name.clone(),
                    field: missing.to_owned(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_fields_dedupes_group_members() {
        let catalog = StepCatalog::default_catalog();
        let focus = catalog.step(steps::FOCUS).unwrap();
        assert_eq!(
            focus.declared_fields(),
            vec!["focus", "energy", "sleep", "stress", "soreness_areas"]
        );
    }

    #[test]
    fn test_steps_are_in_wizard_order() {
        let catalog = StepCatalog::default_catalog();
        let names: Vec<&str> = catalog.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["focus", "session", "preferences"]);
    }

    #[test]
    fn test_check_fields_reports_unregistered_member() {
        let fields = FieldCatalog::builder().build().unwrap();
        let catalog = StepCatalog::new(vec![StepConfig::new("warmup").optional(&["pace"])]);
        assert!(matches!(
            catalog.check_fields(&fields),
            Err(ConfigError::UnknownStepField { .. })
        ));
    }
}
