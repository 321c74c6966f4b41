// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field keys, step names, default bounds, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Field keys are the join point across the registry, validators, and formatter, so
//! every table in the engine refers to them through this module.

/// Field keys for every customizable attribute of the workout wizard
pub mod fields;

/// Default numeric bounds and limits
pub mod limits;

/// Wizard step and progressive group names
pub mod steps;

/// Environment variable names read by the engine configuration
pub mod env_config {
    /// Policy for fields with no registered type (`permissive` or `strict`)
    pub const UNREGISTERED_FIELDS: &str = "PIERRE_WIZARD_UNREGISTERED_FIELDS";
    /// Upper bound, in minutes, for the session duration field
    pub const MAX_SESSION_MINUTES: &str = "PIERRE_WIZARD_MAX_SESSION_MINUTES";
}

/// Service identifiers used in structured logging
pub mod service_names {
    /// Service name reported by the logging layer
    pub const PIERRE_WIZARD_ENGINE: &str = "pierre-wizard-engine";
}
