// ABOUTME: Field key constants for the workout-customization wizard
// ABOUTME: Keys are stable identifiers and are never reused for a different type tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Workout focus (single-select)
pub const FOCUS: &str = "focus";
/// Current energy level (rating)
pub const ENERGY: &str = "energy";
/// Last night's sleep quality (rating)
pub const SLEEP: &str = "sleep";
/// Current stress level (rating)
pub const STRESS: &str = "stress";
/// Sore body areas (multi-select)
pub const SORENESS_AREAS: &str = "soreness_areas";

/// Session length in minutes (duration)
pub const DURATION: &str = "duration";
/// Preferred workout types (multi-select)
pub const WORKOUT_TYPES: &str = "workout_types";
/// Available equipment (multi-select)
pub const EQUIPMENT: &str = "equipment";
/// Training location (single-select)
pub const LOCATION: &str = "location";

/// Comma-delimited list of goals (text)
pub const GOALS: &str = "goals";
/// Comma-delimited list of injuries or limitations (text)
pub const LIMITATIONS: &str = "limitations";
/// Free-form notes for the coach (text)
pub const NOTES: &str = "notes";
