// ABOUTME: Configuration error types for catalog construction and environment parsing
// ABOUTME: Defines error variants for invalid bounds, patterns, and conflicting registrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lower bound exceeds upper bound for a field
    #[error("Invalid range for {field}: min {min} exceeds max {max}")]
    InvalidRange {
        /// Field whose bounds are inconsistent
        field: String,
        /// Resolved lower bound
        min: i64,
        /// Resolved upper bound
        max: i64,
    },

    /// Text pattern failed to compile
    #[error("Invalid pattern for {field}: {reason}")]
    InvalidPattern {
        /// Field carrying the pattern
        field: String,
        /// Compiler diagnostic
        reason: String,
    },

    /// A field key was registered twice with different type tags
    #[error("Field {field} registered as both {first} and {second}")]
    ConflictingRegistration {
        /// Field key
        field: String,
        /// Tag of the first registration
        first: String,
        /// Tag of the conflicting registration
        second: String,
    },

    /// A step declaration references a field that is not registered
    #[error("Step {step} references unregistered field {field}")]
    UnknownStepField {
        /// Step name
        step: String,
        /// Missing field key
        field: String,
    },

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse a configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}
