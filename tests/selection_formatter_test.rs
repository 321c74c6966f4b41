// ABOUTME: Integration tests for the selection formatter
// ABOUTME: Duration buckets, rating label tables, selection counts, curated names, and text lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_wizard_engine::constants::fields;
use serde_json::json;

#[test]
fn test_duration_formatting() {
    let engine = common::engine();
    let format = |minutes| engine.format(fields::DURATION, Some(&json!(minutes)));

    assert_eq!(format(90).as_deref(), Some("1h 30m"));
    assert_eq!(format(60).as_deref(), Some("1 hour"));
    assert_eq!(format(15).as_deref(), Some("15 min"));
    assert_eq!(format(180).as_deref(), Some("3 hours"));
    assert_eq!(format(125).as_deref(), Some("2h 5m"));
}

#[test]
fn test_duration_formatting_is_independent_of_validity() {
    let engine = common::engine();
    // 240 exceeds the session bound but still renders
    assert_eq!(
        engine.format(fields::DURATION, Some(&json!(240))).as_deref(),
        Some("4 hours")
    );
    assert_eq!(
        engine.format(fields::DURATION, Some(&json!("45"))).as_deref(),
        Some("45 min")
    );
}

#[test]
fn test_formatter_failures_render_as_absent() {
    let engine = common::engine();
    assert_eq!(engine.format(fields::DURATION, Some(&json!(-30))), None);
    assert_eq!(engine.format(fields::DURATION, Some(&json!("soon"))), None);
    assert_eq!(engine.format(fields::ENERGY, Some(&json!({"level": 3}))), None);
}

#[test]
fn test_rating_labels() {
    let engine = common::engine();
    assert_eq!(
        engine.format(fields::ENERGY, Some(&json!(4))).as_deref(),
        Some("Moderate (4/6)")
    );
    assert_eq!(engine.format(fields::ENERGY, Some(&json!(7))), None);
    assert_eq!(engine.format(fields::ENERGY, Some(&json!(0))), None);
    assert_eq!(engine.format(fields::ENERGY, Some(&json!(2.5))), None);
}

#[test]
fn test_rating_tables_are_per_field() {
    let engine = common::engine();
    assert_eq!(
        engine.format(fields::SLEEP, Some(&json!(4))).as_deref(),
        Some("Good (4/5)")
    );
    assert_eq!(
        engine.format(fields::STRESS, Some(&json!(4))).as_deref(),
        Some("Tense (4/6)")
    );
    assert_eq!(engine.format(fields::SLEEP, Some(&json!(6))), None);
}

#[test]
fn test_multi_select_formatting() {
    let engine = common::engine();
    assert_eq!(
        engine.format(fields::WORKOUT_TYPES, Some(&json!(["hiit"]))).as_deref(),
        Some("HIIT")
    );
    assert_eq!(
        engine
            .format(fields::EQUIPMENT, Some(&json!(["resistance_bands"])))
            .as_deref(),
        Some("Resistance Bands")
    );
    assert_eq!(
        engine
            .format(fields::WORKOUT_TYPES, Some(&json!(["hiit", "yoga", "pilates"])))
            .as_deref(),
        Some("3 types selected")
    );
    assert_eq!(
        engine
            .format(fields::EQUIPMENT, Some(&json!(["trx", "kettlebell"])))
            .as_deref(),
        Some("2 items selected")
    );
}

#[test]
fn test_empty_multi_select_sentinel() {
    let engine = common::engine();
    assert_eq!(
        engine.format(fields::SORENESS_AREAS, Some(&json!([]))).as_deref(),
        Some("None")
    );
    assert_eq!(engine.format(fields::SORENESS_AREAS, None).as_deref(), Some("None"));
    assert_eq!(engine.format(fields::EQUIPMENT, Some(&json!([]))), None);
    assert_eq!(
        engine.format(fields::SORENESS_AREAS, Some(&json!([""]))).as_deref(),
        Some("None")
    );
}

#[test]
fn test_single_select_names() {
    let engine = common::engine();
    assert_eq!(
        engine.format(fields::LOCATION, Some(&json!("hotel_room"))).as_deref(),
        Some("Hotel Room")
    );
    assert_eq!(
        engine.format(fields::FOCUS, Some(&json!("stress_relief"))).as_deref(),
        Some("Stress Relief")
    );
    assert_eq!(
        engine.format(fields::FOCUS, Some(&json!("energizing_boost"))).as_deref(),
        Some("Energizing Boost")
    );
}

#[test]
fn test_text_list_formatting() {
    let engine = common::engine();
    assert_eq!(
        engine.format(fields::GOALS, Some(&json!("lose weight"))).as_deref(),
        Some("lose weight")
    );
    assert_eq!(
        engine
            .format(fields::GOALS, Some(&json!("strength, mobility , ,endurance")))
            .as_deref(),
        Some("3 goals")
    );
    assert_eq!(
        engine
            .format(fields::LIMITATIONS, Some(&json!("knee, shoulder")))
            .as_deref(),
        Some("2 limitations")
    );
    assert_eq!(engine.format(fields::NOTES, Some(&json!(" , ,"))), None);
}

#[test]
fn test_unregistered_field_is_absent() {
    let engine = common::engine();
    assert_eq!(engine.format("heart_rate", Some(&json!(120))), None);
}

#[test]
fn test_format_is_idempotent() {
    let engine = common::engine();
    let value = json!(["hiit", "yoga"]);
    assert_eq!(
        engine.format(fields::WORKOUT_TYPES, Some(&value)),
        engine.format(fields::WORKOUT_TYPES, Some(&value))
    );
}
