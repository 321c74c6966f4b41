// ABOUTME: Default bounds for field constraints and display bucketing
// ABOUTME: Type-level defaults that per-field overrides are layered on top of
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default lower bound of a rating scale
pub const RATING_MIN: i64 = 1;
/// Default upper bound of a rating scale
pub const RATING_MAX: i64 = 6;

/// Shortest duration any duration field accepts, in minutes
pub const DURATION_MIN_MINUTES: i64 = 5;
/// Longest duration any duration field accepts, in minutes
pub const DURATION_MAX_MINUTES: i64 = 300;

/// Shortest workout session the wizard offers, in minutes
pub const SESSION_MIN_MINUTES: i64 = 10;
/// Default upper bound for the session duration field, in minutes
pub const DEFAULT_SESSION_MAX_MINUTES: i64 = 120;

/// Default maximum length of free text fields, in characters
pub const TEXT_MAX_LENGTH: usize = 500;

/// Minutes per hour, used for duration display bucketing
pub const MINUTES_PER_HOUR: i64 = 60;

/// Completion percentage of a fully filled step
pub const COMPLETE_PERCENTAGE: u8 = 100;
