// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use std::collections::HashMap;

use crate::dynamic::TypeDescriptor;
use crate::mapping::{PropertyOverride, TypeMap};
use crate::{MappingError, Result};

// ---------------------------------------------------------------------------
// TypeMapRegistry
// ---------------------------------------------------------------------------

/// Store of explicit type maps keyed by exact (source, target) type name.
///
/// Filled once while a mapper is built; read-only afterwards.
#[derive(Debug, Default)]
pub struct TypeMapRegistry {
    /// Registration order is kept for diagnostics.
    maps: Vec<TypeMap>,
    /// (source type, target type) -> index into `maps`.
    index: HashMap<(String, String), usize>,
}

impl TypeMapRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type map.
    ///
    /// Fails with `DuplicateTypeMap` if the pair is already present and with
    /// `InvalidConfig` if the map itself is malformed.
    pub fn register(&mut self, type_map: TypeMap) -> Result<()> {
        type_map.validate()?;

        let key = (
            type_map.source_type().to_string(),
            type_map.target_type().to_string(),
        );
        if self.index.contains_key(&key) {
            return Err(MappingError::DuplicateTypeMap {
                source_type: key.0,
                target_type: key.1,
            });
        }

        log::debug!(
            "registered type map {} -> {} ({} overrides)",
            key.0,
            key.1,
            type_map.overrides().len()
        );
        self.index.insert(key, self.maps.len());
        self.maps.push(type_map);
        Ok(())
    }

    /// Exact pair lookup. No variant or subtype matching.
    pub fn lookup(&self, source_type: &str, target_type: &str) -> Option<&TypeMap> {
        self.index
            .get(&(source_type.to_string(), target_type.to_string()))
            .map(|&i| &self.maps[i])
    }

    /// Type maps from `source_type` to any variant of `abstract_target`,
    /// in variant declaration order.
    pub fn lookup_variants(
        &self,
        source_type: &str,
        abstract_target: &TypeDescriptor,
    ) -> Vec<&TypeMap> {
        abstract_target
            .variants()
            .unwrap_or_default()
            .iter()
            .filter_map(|variant| self.lookup(source_type, &variant.name))
            .collect()
    }

    /// Override writing `target_field` in `type_map`.
    pub fn property_override_for<'a>(
        &self,
        type_map: &'a TypeMap,
        target_field: &str,
    ) -> Option<&'a PropertyOverride> {
        type_map.override_for(target_field)
    }

    /// Number of registered type maps.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Returns `true` if no type maps are registered.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Registered type maps in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeMap> {
        self.maps.iter()
    }
}
