// ABOUTME: Field catalog holding the type registry, type-level defaults, and per-field overrides
// ABOUTME: Built once at startup and validated so every registered field resolves to sane constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field catalog for the workout-customization wizard

use crate::errors::ConfigError;
use crate::forms::constraints::{ConstraintOverride, ConstraintResolver, FieldConstraints, TextPattern};
use pierre_core::constants::{fields, limits};
use pierre_core::models::FieldTypeTag;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Goals are a comma-delimited list of short phrases
const GOALS_PATTERN: &str = r"^[A-Za-z0-9\s,.'&\-]+$";

/// Registration of one field key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Stable field key
    pub key: String,
    /// Type tag, fixed for the lifetime of the key
    pub tag: FieldTypeTag,
    /// Human label used in validation messages
    pub label: String,
}

/// Immutable field tables: registry, type defaults, and overrides
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    definitions: Vec<FieldDefinition>,
    index: HashMap<String, usize>,
    type_defaults: HashMap<FieldTypeTag, FieldConstraints>,
    overrides: HashMap<String, ConstraintOverride>,
}

impl FieldCatalog {
    /// Start an empty catalog with the built-in type defaults
    #[must_use]
    pub fn builder() -> FieldCatalogBuilder {
        FieldCatalogBuilder::new()
    }

    /// The wizard's field catalog
    ///
    /// `max_session_minutes` is the single upper bound applied to the session
    /// duration field.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the session bound falls outside the duration
    /// type bounds or a built-in pattern fails to compile
    pub fn default_catalog(max_session_minutes: i64) -> Result<Self, ConfigError> {
        if !(limits::DURATION_MIN_MINUTES..=limits::DURATION_MAX_MINUTES)
            .contains(&max_session_minutes)
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "session maximum {max_session_minutes} must lie within {}..={} minutes",
                limits::DURATION_MIN_MINUTES,
                limits::DURATION_MAX_MINUTES
            )));
        }

        let goals_pattern =
            TextPattern::new(GOALS_PATTERN).map_err(|e| ConfigError::InvalidPattern {
                field: fields::GOALS.to_owned(),
                reason: e.to_string(),
            })?;

        Self::builder()
            .register(fields::FOCUS, FieldTypeTag::SingleSelect, "Workout focus")
            .register(fields::ENERGY, FieldTypeTag::Rating, "Energy level")
            .register(fields::SLEEP, FieldTypeTag::Rating, "Sleep quality")
            .register(fields::STRESS, FieldTypeTag::Rating, "Stress level")
            .register(fields::SORENESS_AREAS, FieldTypeTag::MultiSelect, "Sore areas")
            .register(fields::DURATION, FieldTypeTag::Duration, "Duration")
            .register(fields::WORKOUT_TYPES, FieldTypeTag::MultiSelect, "Workout types")
            .register(fields::EQUIPMENT, FieldTypeTag::MultiSelect, "Equipment")
            .register(fields::LOCATION, FieldTypeTag::SingleSelect, "Location")
            .register(fields::GOALS, FieldTypeTag::Text, "Goals")
            .register(fields::LIMITATIONS, FieldTypeTag::Text, "Limitations")
            .register(fields::NOTES, FieldTypeTag::Text, "Notes")
            .override_field(
                fields::FOCUS,
                ConstraintOverride::default().with_allowed_values([
                    "energizing_boost",
                    "stress_relief",
                    "strength_building",
                    "mobility_flow",
                    "cardio_burn",
                    "recovery_reset",
                ]),
            )
            .override_field(fields::SLEEP, ConstraintOverride::default().with_max(5))
            .override_field(
                fields::SORENESS_AREAS,
                ConstraintOverride::default().with_max_selections(6),
            )
            .override_field(
                fields::DURATION,
                ConstraintOverride::default()
                    .with_min(limits::SESSION_MIN_MINUTES)
                    .with_max(max_session_minutes)
                    .with_required(true),
            )
            .override_field(
                fields::WORKOUT_TYPES,
                ConstraintOverride::default()
                    .with_min_selections(1)
                    .with_max_selections(5),
            )
            .override_field(
                fields::EQUIPMENT,
                ConstraintOverride::default().with_max_selections(10),
            )
            .override_field(
                fields::LOCATION,
                ConstraintOverride::default().with_allowed_values([
                    "home",
                    "gym",
                    "outdoors",
                    "hotel_room",
                    "office",
                ]),
            )
            .override_field(
                fields::GOALS,
                ConstraintOverride::default()
                    .with_max_length(200)
                    .with_pattern(goals_pattern),
            )
            .override_field(
                fields::LIMITATIONS,
                ConstraintOverride::default().with_max_length(300),
            )
            .build()
    }

    /// Registration for `key`, if any
    #[must_use]
    pub fn definition(&self, key: &str) -> Option<&FieldDefinition> {
        self.index
            .get(key)
            .and_then(|&i| self.definitions.get(i))
    }

    /// All registrations in registration order
    #[must_use]
    pub fn definitions(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    /// Type-level default constraints for `tag`
    #[must_use]
    pub fn type_default(&self, tag: FieldTypeTag) -> FieldConstraints {
        self.type_defaults
            .get(&tag)
            .cloned()
            .unwrap_or_else(|| FieldConstraints::type_default(tag))
    }

    /// Override record for `key`, if any
    #[must_use]
    pub fn override_for(&self, key: &str) -> Option<&ConstraintOverride> {
        self.overrides.get(key)
    }
}

/// Builder for [`FieldCatalog`]
#[derive(Debug, Clone)]
pub struct FieldCatalogBuilder {
    definitions: Vec<FieldDefinition>,
    type_defaults: HashMap<FieldTypeTag, FieldConstraints>,
    overrides: HashMap<String, ConstraintOverride>,
}

impl Default for FieldCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldCatalogBuilder {
    /// Create a builder seeded with the built-in type defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
            type_defaults: FieldTypeTag::ALL
                .into_iter()
                .map(|tag| (tag, FieldConstraints::type_default(tag)))
                .collect(),
            overrides: HashMap::new(),
        }
    }

    /// Replace the default row for the constraints' tag
    #[must_use]
    pub fn type_default(mut self, constraints: FieldConstraints) -> Self {
        self.type_defaults.insert(constraints.tag(), constraints);
        self
    }

    /// Register a field key under a type tag
    #[must_use]
    pub fn register(mut self, key: &str, tag: FieldTypeTag, label: &str) -> Self {
        self.definitions.push(FieldDefinition {
            key: key.to_owned(),
            tag,
            label: label.to_owned(),
        });
        self
    }

    /// Attach an override record to a field key
    #[must_use]
    pub fn override_field(mut self, key: &str, overrides: ConstraintOverride) -> Self {
        self.overrides.insert(key.to_owned(), overrides);
        self
    }

    /// Validate and freeze the catalog
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a key is registered under two tags or when
    /// any default row or resolved field constraint has inverted bounds
    pub fn build(self) -> Result<FieldCatalog, ConfigError> {
        let mut definitions: Vec<FieldDefinition> = Vec::with_capacity(self.definitions.len());
        let mut index: HashMap<String, usize> = HashMap::new();
        for definition in self.definitions {
            if let Some(first) = index
                .get(&definition.key)
                .and_then(|&i| definitions.get(i))
            {
                if first.tag != definition.tag {
                    return Err(ConfigError::ConflictingRegistration {
                        field: definition.key,
                        first: first.tag.to_string(),
                        second: definition.tag.to_string(),
                    });
                }
                continue;
            }
            index.insert(definition.key.clone(), definitions.len());
            definitions.push(definition);
        }

        for (tag, defaults) in &self.type_defaults {
            defaults.check_bounds(tag.as_str())?;
        }

        for key in self.overrides.keys() {
            if !index.contains_key(key) {
                warn!(field = %key, "Constraint override targets an unregistered field");
            }
        }

        let catalog = FieldCatalog {
            definitions,
            index,
            type_defaults: self.type_defaults,
            overrides: self.overrides,
        };

        let resolver = ConstraintResolver::new(&catalog);
        for definition in &catalog.definitions {
            if let Some(overrides) = catalog.override_for(&definition.key) {
                let ignored = overrides.ignored_keys(definition.tag);
                if !ignored.is_empty() {
                    warn!(
                        field = %definition.key,
                        tag = %definition.tag,
                        ignored = ?ignored,
                        "Constraint override keys do not apply to field type"
                    );
                }
            }
            resolver
                .constraints_of(&definition.key, definition.tag)
                .check_bounds(&definition.key)?;
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_registers_every_field() {
        let catalog = FieldCatalog::default_catalog(limits::DEFAULT_SESSION_MAX_MINUTES).unwrap();
        assert_eq!(catalog.definitions().len(), 12);
        assert_eq!(
            catalog.definition(fields::ENERGY).map(|d| d.tag),
            Some(FieldTypeTag::Rating)
        );
        assert!(catalog.definition("mood").is_none());
    }

    #[test]
    fn test_every_registered_key_resolves_to_its_own_definition() {
        let catalog = FieldCatalog::builder()
            .register("energy", FieldTypeTag::Rating, "Energy")
            .register("goals", FieldTypeTag::Text, "Goals")
            .register("energy", FieldTypeTag::Rating, "Energy again")
            .register("equipment", FieldTypeTag::MultiSelect, "Equipment")
            .build()
            .unwrap();
        for definition in catalog.definitions() {
            assert_eq!(
                catalog.definition(&definition.key).map(|d| d.key.as_str()),
                Some(definition.key.as_str())
            );
        }
        assert_eq!(
            catalog.definition("equipment").map(|d| d.tag),
            Some(FieldTypeTag::MultiSelect)
        );
    }

    #[test]
    fn test_conflicting_registration_is_rejected() {
        let result = FieldCatalog::builder()
            .register("energy", FieldTypeTag::Rating, "Energy")
            .register("energy", FieldTypeTag::Text, "Energy")
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::ConflictingRegistration { .. })
        ));
    }

    #[test]
    fn test_duplicate_registration_with_same_tag_keeps_first() {
        let catalog = FieldCatalog::builder()
            .register("energy", FieldTypeTag::Rating, "Energy level")
            .register("energy", FieldTypeTag::Rating, "Energy")
            .build()
            .unwrap();
        assert_eq!(catalog.definitions().len(), 1);
        assert_eq!(
            catalog.definition("energy").map(|d| d.label.as_str()),
            Some("Energy level")
        );
    }

    #[test]
    fn test_inverted_override_is_rejected() {
        let result = FieldCatalog::builder()
            .register("duration", FieldTypeTag::Duration, "Duration")
            .override_field("duration", ConstraintOverride::default().with_min(400))
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidRange { .. })));
    }

    #[test]
    fn test_session_bound_outside_duration_bounds_is_rejected() {
        assert!(matches!(
            FieldCatalog::default_catalog(301),
            Err(ConfigError::ValueOutOfRange(_))
        ));
        assert!(FieldCatalog::default_catalog(300).is_ok());
    }
}
