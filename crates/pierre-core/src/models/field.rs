// ABOUTME: Field type tag enumeration for customizable wizard attributes
// ABOUTME: Each field key maps to exactly one tag for its lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type category governing a field's validation and formatting rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldTypeTag {
    /// Bounded integer scale (energy, sleep, stress)
    Rating,
    /// Set of string ids, order irrelevant
    MultiSelect,
    /// One string id from an allowed or unconstrained domain
    SingleSelect,
    /// Bounded integer number of minutes
    Duration,
    /// Free string with length bounds
    Text,
}

impl FieldTypeTag {
    /// All tags, in the order the default constraint table lists them
    pub const ALL: [Self; 5] = [
        Self::Rating,
        Self::MultiSelect,
        Self::SingleSelect,
        Self::Duration,
        Self::Text,
    ];

    /// Wire name of the tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::MultiSelect => "multi-select",
            Self::SingleSelect => "single-select",
            Self::Duration => "duration",
            Self::Text => "text",
        }
    }

    /// Parse a tag from its wire name
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Whether values of this tag are coerced to numbers
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Rating | Self::Duration)
    }
}

impl fmt::Display for FieldTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
