// ABOUTME: Integration tests for environment-driven engine configuration
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_wizard_engine::config::{EngineConfig, UnregisteredFieldPolicy};
use pierre_wizard_engine::constants::{env_config, fields};
use pierre_wizard_engine::errors::{ConfigError, ErrorCode};
use pierre_wizard_engine::forms::FormEngine;
use serde_json::json;
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var(env_config::UNREGISTERED_FIELDS);
    env::remove_var(env_config::MAX_SESSION_MINUTES);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.max_session_minutes, 120);
    assert_eq!(config.unregistered_fields, UnregisteredFieldPolicy::Permissive);
}

#[test]
#[serial]
fn test_strict_policy_from_environment() {
    clear_env();
    env::set_var(env_config::UNREGISTERED_FIELDS, "strict");

    let engine = FormEngine::from_env().unwrap();
    assert_eq!(
        engine.validate("pace", Some(&json!("fast"))).error.as_deref(),
        Some("Unknown field: pace")
    );
    clear_env();
}

#[test]
#[serial]
fn test_session_bound_from_environment() {
    clear_env();
    env::set_var(env_config::MAX_SESSION_MINUTES, "300");

    let engine = FormEngine::from_env().unwrap();
    assert!(engine.validate(fields::DURATION, Some(&json!(240))).is_valid);
    assert_eq!(
        engine
            .validate(fields::DURATION, Some(&json!(301)))
            .error
            .as_deref(),
        Some("Duration must be no more than 300 minutes")
    );
    clear_env();
}

#[test]
#[serial]
fn test_malformed_session_bound() {
    clear_env();
    env::set_var(env_config::MAX_SESSION_MINUTES, "two hours");
    assert!(matches!(EngineConfig::from_env(), Err(ConfigError::Parse(_))));

    let error = FormEngine::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    clear_env();
}

#[test]
#[serial]
fn test_session_bound_outside_duration_bounds() {
    clear_env();
    env::set_var(env_config::MAX_SESSION_MINUTES, "600");
    assert!(matches!(
        EngineConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    let error = FormEngine::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.http_status(), 500);
    clear_env();
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_variable_is_an_env_error() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    clear_env();
    env::set_var(
        env_config::MAX_SESSION_MINUTES,
        OsString::from_vec(vec![0x31, 0x32, 0xff]),
    );
    assert!(matches!(
        EngineConfig::from_env(),
        Err(ConfigError::EnvVar(env::VarError::NotUnicode(_)))
    ));
    let error = FormEngine::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    clear_env();
}
