// ABOUTME: Unified error handling for the wizard engine
// ABOUTME: Re-exports the foundation error types so callers depend on one path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error types
//!
//! Validation failures are values ([`crate::forms::ValidationOutcome`] and
//! [`crate::forms::ValidationResult`]), never errors. The types here cover
//! fallible construction and the conversion of a failed step into an
//! [`AppError`] for hosts that map results onto responses.

pub use pierre_core::errors::{AppError, AppResult, ConfigError, ErrorCode};
