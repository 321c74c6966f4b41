// ABOUTME: Completion percentages per wizard step and across the whole wizard
// ABOUTME: Steps are weighted equally regardless of how many fields they declare
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{StepCatalog, StepConfig};
use pierre_core::constants::limits::COMPLETE_PERCENTAGE;
use pierre_core::models::{is_empty_value, RawValues};
use tracing::warn;

/// `part / whole` as a rounded integer percentage; an empty whole is complete
#[must_use]
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return COMPLETE_PERCENTAGE;
    }
    let part = part.min(whole);
    let rounded = (part * 100 + whole / 2) / whole;
    u8::try_from(rounded).unwrap_or(COMPLETE_PERCENTAGE)
}

/// Computes completion from the step declarations
#[derive(Debug, Clone, Copy)]
pub struct CompletionCalculator<'a> {
    steps: &'a StepCatalog,
}

impl<'a> CompletionCalculator<'a> {
    /// Create a calculator over a step catalog
    #[must_use]
    pub const fn new(steps: &'a StepCatalog) -> Self {
        Self { steps }
    }

    /// Share of the step's declared fields holding a non-empty value
    ///
    /// Undeclared steps and steps without fields report 100.
    #[must_use]
    pub fn step_completion(&self, name: &str, values: &RawValues) -> u8 {
        self.steps.step(name).map_or_else(
            || {
                warn!(step = %name, "Completion requested for undeclared step");
                COMPLETE_PERCENTAGE
            },
            |step| Self::config_completion(step, values),
        )
    }

    /// Completion of an explicit step declaration
    #[must_use]
    pub fn config_completion(step: &StepConfig, values: &RawValues) -> u8 {
        let declared = step.declared_fields();
        let filled = declared
            .iter()
            .filter(|key| !is_empty_value(values.get(**key)))
            .count();
        percentage(filled, declared.len())
    }

    /// Rounded mean of every step's completion
    #[must_use]
    pub fn overall_completion(&self, values: &RawValues) -> u8 {
        let steps = self.steps.steps();
        if steps.is_empty() {
            return COMPLETE_PERCENTAGE;
        }
        let total: usize = steps
            .iter()
            .map(|step| usize::from(Self::config_completion(step, values)))
            .sum();
        let mean = (total + steps.len() / 2) / steps.len();
        u8::try_from(mean).unwrap_or(COMPLETE_PERCENTAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(0, 0), 100);
    }

    #[test]
    fn test_empty_catalog_is_complete() {
        let catalog = StepCatalog::new(Vec::new());
        let calculator = CompletionCalculator::new(&catalog);
        assert_eq!(calculator.overall_completion(&RawValues::new()), 100);
    }

    #[test]
    fn test_step_without_fields_is_complete() {
        let catalog = StepCatalog::new(vec![StepConfig::new("intro")]);
        let calculator = CompletionCalculator::new(&catalog);
        assert_eq!(calculator.step_completion("intro", &RawValues::new()), 100);
    }
}
