// ABOUTME: Core types and constants for the Pierre workout-customization wizard engine
// ABOUTME: Foundation crate with error handling, field models, and catalog constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the wizard
//! validation engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ConfigError`
//! - **constants**: Field keys, step names, default bounds, and environment variable names
//! - **models**: Field type tags and the typed `FieldValue` sum type

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FieldTypeTag`, `FieldValue`, raw value helpers)
pub mod models;
