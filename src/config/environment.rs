// ABOUTME: Environment-based engine configuration loaded once at process start
// ABOUTME: Controls the unregistered-field policy and the unified session duration bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration for the wizard engine

use crate::errors::ConfigError;
use pierre_core::constants::{env_config, limits};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// How the engine treats a field key with no registered type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnregisteredFieldPolicy {
    /// Treat the field as always valid and skip formatting (logged at debug)
    #[default]
    Permissive,
    /// Report the field as invalid with an "Unknown field" message
    Strict,
}

impl UnregisteredFieldPolicy {
    /// Parse from string with fallback to the permissive default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "strict" | "reject" => Self::Strict,
            _ => Self::Permissive,
        }
    }

    /// Policy name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for UnregisteredFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Policy for fields with no registered type
    pub unregistered_fields: UnregisteredFieldPolicy,
    /// Upper bound, in minutes, applied to the session duration field
    pub max_session_minutes: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            unregistered_fields: UnregisteredFieldPolicy::default(),
            max_session_minutes: limits::DEFAULT_SESSION_MAX_MINUTES,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvVar`] if a variable is set but not valid Unicode,
    /// [`ConfigError::Parse`] if the session bound is not an integer, and
    /// [`ConfigError::ValueOutOfRange`] if it lies outside the duration type bounds
    pub fn from_env() -> Result<Self, ConfigError> {
        let unregistered_fields = UnregisteredFieldPolicy::from_str_or_default(&env_var_or(
            env_config::UNREGISTERED_FIELDS,
            UnregisteredFieldPolicy::Permissive.as_str(),
        )?);

        let raw_minutes = env_var_or(
            env_config::MAX_SESSION_MINUTES,
            &limits::DEFAULT_SESSION_MAX_MINUTES.to_string(),
        )?;
        let max_session_minutes = raw_minutes.trim().parse::<i64>().map_err(|e| {
            ConfigError::Parse(format!(
                "{}={raw_minutes}: {e}",
                env_config::MAX_SESSION_MINUTES
            ))
        })?;

        let config = Self {
            unregistered_fields,
            max_session_minutes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] if the session bound lies outside
    /// the duration type bounds or below the shortest session
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lowest = limits::SESSION_MIN_MINUTES.max(limits::DURATION_MIN_MINUTES);
        if (lowest..=limits::DURATION_MAX_MINUTES).contains(&self.max_session_minutes) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(format!(
                "{} must lie within {lowest}..={} minutes, got {}",
                env_config::MAX_SESSION_MINUTES,
                limits::DURATION_MAX_MINUTES,
                self.max_session_minutes
            )))
        }
    }
}

fn env_var_or(key: &str, default: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_owned()),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
