// ABOUTME: Integration tests for step and overall completion percentages
// ABOUTME: Checks monotonicity, bounds, rounding, and equal step weighting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_wizard_engine::constants::{fields, steps};
use pierre_wizard_engine::models::RawValues;
use serde_json::{json, Value};

fn sample_value(key: &str) -> Value {
    match key {
        fields::ENERGY | fields::STRESS => json!(3),
        fields::SLEEP => json!(4),
        fields::DURATION => json!(45),
        fields::FOCUS => json!("mobility_flow"),
        fields::LOCATION => json!("gym"),
        fields::SORENESS_AREAS | fields::WORKOUT_TYPES | fields::EQUIPMENT => json!(["core"]),
        _ => json!("stay consistent"),
    }
}

#[test]
fn test_step_completion_is_monotonic_and_bounded() {
    let engine = common::engine();
    for step in engine.step_catalog().steps() {
        let mut values = RawValues::new();
        let mut previous = engine.step_completion(&step.name, &values);
        assert_eq!(previous, 0, "{} should start empty", step.name);

        for key in step.declared_fields() {
            values.insert(key.to_owned(), sample_value(key));
            let current = engine.step_completion(&step.name, &values);
            assert!(current >= previous, "{} dropped after {key}", step.name);
            previous = current;
        }
        assert_eq!(previous, 100, "{} should end complete", step.name);
    }
}

#[test]
fn test_step_completion_rounds_to_nearest() {
    let engine = common::engine();
    // focus declares five fields
    let values = common::values(&[(fields::ENERGY, json!(2))]);
    assert_eq!(engine.step_completion(steps::FOCUS, &values), 20);

    // preferences declares three fields
    let values = common::values(&[
        (fields::GOALS, json!("mobility")),
        (fields::NOTES, json!("left knee")),
    ]);
    assert_eq!(engine.step_completion(steps::PREFERENCES, &values), 67);
}

#[test]
fn test_invalid_values_still_count_as_filled() {
    let engine = common::engine();
    let values = common::values(&[(fields::DURATION, json!(999))]);
    assert_eq!(engine.step_completion(steps::SESSION, &values), 25);
}

#[test]
fn test_overall_completion_weights_steps_equally() {
    let engine = common::engine();
    assert_eq!(engine.overall_completion(&RawValues::new()), 0);

    // preferences fully filled (100), focus and session empty (0): mean 33.3
    let values = common::values(&[
        (fields::GOALS, json!("strength")),
        (fields::LIMITATIONS, json!("none")),
        (fields::NOTES, json!("mornings")),
    ]);
    assert_eq!(engine.overall_completion(&values), 33);

    // one of four session fields (25) and preferences (100): mean 41.7
    let mut values = values;
    values.insert(fields::DURATION.to_owned(), json!(30));
    assert_eq!(engine.overall_completion(&values), 42);
}

#[test]
fn test_unknown_step_reports_complete() {
    let engine = common::engine();
    assert_eq!(engine.step_completion("stretching", &RawValues::new()), 100);
}
