// ABOUTME: Core data models for the wizard validation engine
// ABOUTME: Re-exports field type tags, the typed FieldValue sum type, and raw value helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Raw field values arrive from the form layer as loosely typed JSON. The engine
//! never trusts the value's own shape to decide how it is validated: the field
//! registry yields a [`FieldTypeTag`], and the tag selects the matching
//! [`FieldValue`] variant constructor.

mod field;
mod value;

pub use field::FieldTypeTag;
pub use value::{
    coerce_number, is_empty_value, selection_count, selection_ids, stringify, FieldValue, RawValues,
    ValueCoercionError,
};
