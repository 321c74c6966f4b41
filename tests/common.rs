// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, engine construction, and raw value builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_wizard_engine`

use pierre_wizard_engine::config::{EngineConfig, UnregisteredFieldPolicy};
use pierre_wizard_engine::forms::FormEngine;
use pierre_wizard_engine::models::RawValues;
use serde_json::Value;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine with the built-in catalogs and default configuration
pub fn engine() -> FormEngine {
    init_test_logging();
    FormEngine::with_defaults().expect("built-in catalogs are valid")
}

/// Engine that rejects unregistered fields
pub fn strict_engine() -> FormEngine {
    init_test_logging();
    FormEngine::new(EngineConfig {
        unregistered_fields: UnregisteredFieldPolicy::Strict,
        ..EngineConfig::default()
    })
    .expect("built-in catalogs are valid")
}

/// Raw values from key/value pairs
pub fn values(pairs: &[(&str, Value)]) -> RawValues {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}
