// ABOUTME: Progressive form validation and completion scoring for the workout wizard
// ABOUTME: Registry, constraint resolution, validators, completion, formatting, and selection state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Wizard Form Engine
//!
//! Data flows one way: raw field values go through the [`FieldValidator`]
//! (using the [`FieldRegistry`] and [`ConstraintResolver`]), then the
//! [`StepValidator`], then the [`CompletionCalculator`] and
//! [`SelectionStateDeriver`]. The [`SelectionFormatter`] is independent and
//! only reads raw values.
//!
//! Every component borrows the immutable catalogs and recomputes from its
//! arguments on each call. None of the public operations return `Err`: failures
//! are reported as values.

/// Completion percentages per step and overall
pub mod completion;
/// Field constraint records and override resolution
pub mod constraints;
/// Facade wiring the catalogs into every component
pub mod engine;
/// Single-field validation
pub mod field_validator;
/// Field key to type tag lookup
pub mod registry;
/// Human-readable rendering of raw values
pub mod selection_formatter;
/// Gating-field state consumed by buttons and progress bars
pub mod selection_state;
/// Step validation with progressive groups
pub mod step_validator;

pub use completion::CompletionCalculator;
pub use constraints::{ConstraintOverride, ConstraintResolver, FieldConstraints, TextPattern};
pub use engine::{FormEngine, SelectionBadge};
pub use field_validator::{FieldValidator, ValidationOutcome};
pub use registry::FieldRegistry;
pub use selection_formatter::{FormatError, SelectionFormatter};
pub use selection_state::{SelectionStateDeriver, StepSelectionState};
pub use step_validator::{StepValidator, ValidationResult};
