// ABOUTME: Field type registry mapping field keys to their type tag and label
// ABOUTME: Unregistered keys yield no tag; callers decide what that means
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::FieldCatalog;
use pierre_core::models::FieldTypeTag;

/// Read-only view of the registered field keys
#[derive(Debug, Clone, Copy)]
pub struct FieldRegistry<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> FieldRegistry<'a> {
    /// Create a registry over a field catalog
    #[must_use]
    pub const fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Type tag of `key`, or `None` when the key is unregistered
    #[must_use]
    pub fn type_of(&self, key: &str) -> Option<FieldTypeTag> {
        self.catalog.definition(key).map(|definition| definition.tag)
    }

    /// Human label of `key`
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&'a str> {
        self.catalog
            .definition(key)
            .map(|definition| definition.label.as_str())
    }

    /// Human label of `key`, falling back to the key itself
    #[must_use]
    pub fn label_or_key<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.label(key).unwrap_or(key)
    }

    /// Registered keys in registration order
    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.catalog
            .definitions()
            .iter()
            .map(|definition| definition.key.as_str())
    }
}
