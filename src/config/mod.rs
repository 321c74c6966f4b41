// ABOUTME: Configuration module for the static wizard tables and environment settings
// ABOUTME: Field catalog, step catalog, display tables, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the wizard engine
//!
//! All configuration is static data constructed once at process start and
//! passed by reference into the engine components:
//!
//! - **Environment**: Engine policy settings from environment variables
//! - **Fields**: Field type registry, type-level defaults, and per-field overrides
//! - **Steps**: Per-step field groups, progressive groups, ceilings, and gating fields
//! - **Display**: Label tables and nouns used by the selection formatter

/// Rendering tables for the selection formatter
pub mod display;
/// Engine configuration from environment variables
pub mod environment;
/// Field type registry and constraint tables
pub mod fields;
/// Wizard step declarations
pub mod steps;

pub use display::DisplayCatalog;
pub use environment::{EngineConfig, UnregisteredFieldPolicy};
pub use fields::{FieldCatalog, FieldCatalogBuilder, FieldDefinition};
pub use steps::{ProgressiveGroup, StepCatalog, StepCeiling, StepConfig};
