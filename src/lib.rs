// ABOUTME: Main library entry point for the Pierre workout wizard form engine
// ABOUTME: Progressive validation, completion scoring, and selection formatting for wizard steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Wizard Engine
//!
//! The validation and completion-scoring engine behind the workout-customization
//! wizard. The surrounding form layer owns the raw field values; the engine only
//! reads them and reports on them.
//!
//! ## Features
//!
//! - **Typed field values**: five type tags, each selecting its own value variant
//! - **Progressive groups**: partly filled clusters produce guidance, not errors
//! - **Completion scoring**: per step and overall, steps weighted equally
//! - **Selection formatting**: duration buckets, ordinal rating labels, pluralized counts
//! - **Selection state**: gating-field progress for buttons and progress bars
//!
//! ## Architecture
//!
//! - **Config**: Immutable field, step, and display catalogs plus environment settings
//! - **Forms**: Registry, resolver, validators, completion, formatter, and the engine facade
//! - **Logging**: Structured `tracing` setup for hosts without their own subscriber
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_wizard_engine::forms::FormEngine;
//! use pierre_wizard_engine::errors::AppResult;
//! use pierre_wizard_engine::models::RawValues;
//! use serde_json::json;
//!
//! fn main() -> AppResult<()> {
//!     let engine = FormEngine::from_env()?;
//!
//!     let mut values = RawValues::new();
//!     values.insert("focus".into(), json!("energizing_boost"));
//!     values.insert("energy".into(), json!(4));
//!
//!     let state = engine.step_selection_state("focus", &values);
//!     println!("focus step can proceed: {}", state.can_proceed);
//!     Ok(())
//! }
//! ```

/// Static catalogs and environment configuration
pub mod config;

/// Error types
pub mod errors;

/// Validation, completion, formatting, and selection state
pub mod forms;

/// Structured logging setup
pub mod logging;

/// Field keys, step names, limits, and environment variable names
pub use pierre_core::constants;

/// Field type tags, typed values, and raw value helpers
pub use pierre_core::models;
