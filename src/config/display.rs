// ABOUTME: Display tables used to render raw field values as badges and summaries
// ABOUTME: Rating label tables, selection unit nouns, empty sentinels, and curated id names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::constants::fields;
use serde::Serialize;
use std::collections::HashMap;

/// Unit noun used when a multi-select field has no specific one
const DEFAULT_SELECTION_UNIT: &str = "options";
/// Noun used when a comma-list text field has no specific one
const DEFAULT_TEXT_NOUN: &str = "items";

/// Immutable display tables for the selection formatter
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayCatalog {
    rating_labels: HashMap<String, Vec<String>>,
    selection_units: HashMap<String, String>,
    empty_sentinels: HashMap<String, String>,
    text_nouns: HashMap<String, String>,
    name_overrides: HashMap<String, String>,
}

impl DisplayCatalog {
    /// The wizard's display tables
    #[must_use]
    pub fn default_catalog() -> Self {
        Self::default()
            .with_rating_labels(
                fields::ENERGY,
                &[
                    "Exhausted",
                    "Tired",
                    "Low",
                    "Moderate",
                    "Energized",
                    "Fully Charged",
                ],
            )
            .with_rating_labels(
                fields::SLEEP,
                &["Terrible", "Poor", "Fair", "Good", "Excellent"],
            )
            .with_rating_labels(
                fields::STRESS,
                &[
                    "Very Calm",
                    "Calm",
                    "Balanced",
                    "Tense",
                    "Stressed",
                    "Overwhelmed",
                ],
            )
            .with_selection_unit(fields::SORENESS_AREAS, "areas")
            .with_selection_unit(fields::WORKOUT_TYPES, "types")
            .with_selection_unit(fields::EQUIPMENT, "items")
            .with_empty_sentinel(fields::SORENESS_AREAS, "None")
            .with_text_noun(fields::GOALS, "goals")
            .with_text_noun(fields::LIMITATIONS, "limitations")
            .with_text_noun(fields::NOTES, "notes")
            .with_name("hiit", "HIIT")
            .with_name("no_equipment", "Bodyweight Only")
            .with_name("trx", "TRX")
    }

    /// Set the ordinal label table of a rating field, lowest rating first
    #[must_use]
    pub fn with_rating_labels(mut self, key: &str, labels: &[&str]) -> Self {
        self.rating_labels.insert(
            key.to_owned(),
            labels.iter().map(|l| (*l).to_owned()).collect(),
        );
        self
    }

    /// Set the unit noun of a multi-select field
    #[must_use]
    pub fn with_selection_unit(mut self, key: &str, unit: &str) -> Self {
        self.selection_units.insert(key.to_owned(), unit.to_owned());
        self
    }

    /// Set the string shown for an empty multi-select field
    #[must_use]
    pub fn with_empty_sentinel(mut self, key: &str, sentinel: &str) -> Self {
        self.empty_sentinels
            .insert(key.to_owned(), sentinel.to_owned());
        self
    }

    /// Set the noun of a comma-list text field
    #[must_use]
    pub fn with_text_noun(mut self, key: &str, noun: &str) -> Self {
        self.text_nouns.insert(key.to_owned(), noun.to_owned());
        self
    }

    /// Set a curated display name for a selection id
    #[must_use]
    pub fn with_name(mut self, id: &str, name: &str) -> Self {
        self.name_overrides.insert(id.to_owned(), name.to_owned());
        self
    }

    /// Ordinal label table of a rating field
    #[must_use]
    pub fn rating_labels(&self, key: &str) -> Option<&[String]> {
        self.rating_labels.get(key).map(Vec::as_slice)
    }

    /// Unit noun of a multi-select field
    #[must_use]
    pub fn selection_unit(&self, key: &str) -> &str {
        self.selection_units
            .get(key)
            .map_or(DEFAULT_SELECTION_UNIT, String::as_str)
    }

    /// Sentinel shown when a multi-select field is empty
    #[must_use]
    pub fn empty_sentinel(&self, key: &str) -> Option<&str> {
        self.empty_sentinels.get(key).map(String::as_str)
    }

    /// Noun of a comma-list text field
    #[must_use]
    pub fn text_noun(&self, key: &str) -> &str {
        self.text_nouns
            .get(key)
            .map_or(DEFAULT_TEXT_NOUN, String::as_str)
    }

    /// Human name for a selection id
    ///
    /// Curated names win; anything else is converted mechanically from
    /// `snake_case` (or `kebab-case`) to Title Case.
    #[must_use]
    pub fn display_name(&self, id: &str) -> String {
        self.name_overrides
            .get(id)
            .cloned()
            .unwrap_or_else(|| snake_to_title(id))
    }
}

/// Mechanical `snake_case` to Title Case conversion
#[must_use]
pub fn snake_to_title(id: &str) -> String {
    id.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_to_title() {
        assert_eq!(snake_to_title("stress_relief"), "Stress Relief");
        assert_eq!(snake_to_title("lower-back"), "Lower Back");
        assert_eq!(snake_to_title("GYM"), "Gym");
        assert_eq!(snake_to_title("__core__"), "Core");
        assert_eq!(snake_to_title(""), "");
    }

    #[test]
    fn test_curated_names_win() {
        let display = DisplayCatalog::default_catalog();
        assert_eq!(display.display_name("hiit"), "HIIT");
        assert_eq!(display.display_name("no_equipment"), "Bodyweight Only");
        assert_ne!(
            display.display_name("no_equipment"),
            snake_to_title("no_equipment")
        );
        assert_eq!(display.display_name("trx"), "TRX");
        assert_eq!(display.display_name("resistance_bands"), "Resistance Bands");
    }

    #[test]
    fn test_rating_tables_are_distinct() {
        let display = DisplayCatalog::default_catalog();
        assert_eq!(display.rating_labels(fields::ENERGY).map(<[String]>::len), Some(6));
        assert_eq!(display.rating_labels(fields::SLEEP).map(<[String]>::len), Some(5));
        assert_ne!(
            display.rating_labels(fields::ENERGY),
            display.rating_labels(fields::STRESS)
        );
    }
}
