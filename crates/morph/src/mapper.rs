// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapper facade.

use crate::config::MappingOptions;
use crate::dynamic::{DynamicValue, TypeDescriptor};
use crate::mapping::{MappingContext, PropertyMapper, TypeMap, TypeMapRegistry};
use crate::{Mappable, Result};

/// Maps values between type hierarchies.
///
/// Built once from a set of [`TypeMap`]s and [`MappingOptions`]; immutable
/// afterwards. `Mapper` is `Send + Sync` and can be shared behind an `Arc`
/// by any number of threads.
///
/// # Example
/// ```rust
/// use morph::{Mappable, Mapper, MappingOptions};
///
/// #[derive(Debug, Mappable)]
/// struct Person { id: u32, name: String }
///
/// #[derive(Debug, Mappable)]
/// struct PersonDto { name: String }
///
/// let mapper = Mapper::new(Vec::new(), MappingOptions::default())?;
/// let dto: PersonDto = mapper.map(&Person { id: 1, name: "Ada".into() })?;
/// assert_eq!(dto.name, "Ada");
/// # Ok::<(), morph::MappingError>(())
/// ```
#[derive(Debug)]
pub struct Mapper {
    registry: TypeMapRegistry,
    options: MappingOptions,
}

impl Mapper {
    /// Build a mapper. Fails on a duplicate (source, target) pair or a
    /// malformed type map.
    pub fn new(type_maps: impl IntoIterator<Item = TypeMap>, options: MappingOptions) -> Result<Self> {
        let mut registry = TypeMapRegistry::new();
        for type_map in type_maps {
            registry.register(type_map)?;
        }
        log::debug!(
            "mapper ready: {} type maps, dynamic={}, identity={}",
            registry.len(),
            options.dynamic_enabled(),
            options.identity_enabled()
        );
        Ok(Self { registry, options })
    }

    /// Create a mapper builder.
    ///
    /// # Example
    /// ```rust
    /// use morph::{Mapper, MappingOptions};
    ///
    /// let mapper = Mapper::builder()
    ///     .options(MappingOptions::new().dynamic_type_mapping(true))
    ///     .build()?;
    /// assert!(mapper.options().dynamic_enabled());
    /// # Ok::<(), morph::MappingError>(())
    /// ```
    pub fn builder() -> MapperBuilder {
        MapperBuilder::new()
    }

    pub fn options(&self) -> &MappingOptions {
        &self.options
    }

    pub fn registry(&self) -> &TypeMapRegistry {
        &self.registry
    }

    /// Map `source` into a new `T`.
    ///
    /// The source is read, never modified; the result shares no state with it.
    pub fn map<T: Mappable, S: Mappable>(&self, source: &S) -> Result<T> {
        let source_desc = S::descriptor();
        let target_desc = T::descriptor();
        let mapped = self.map_value(&source.to_dynamic(), &source_desc, &target_desc)?;
        T::from_dynamic(mapped)
    }

    /// Map a dynamic value described by `source` into a value of `target`.
    pub fn map_value(
        &self,
        value: &DynamicValue,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
    ) -> Result<DynamicValue> {
        let root = value.type_name().unwrap_or(&source.name);
        let ctx = MappingContext::new(&self.registry, &self.options, root);
        log::trace!("map {} -> {}", root, target.name);
        PropertyMapper::map_value(&ctx, value, source, target)
    }
}

/// Builder for [`Mapper`].
#[derive(Debug, Default)]
pub struct MapperBuilder {
    type_maps: Vec<TypeMap>,
    options: MappingOptions,
}

impl MapperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set resolution options.
    #[must_use]
    pub fn options(mut self, options: MappingOptions) -> Self {
        self.options = options;
        self
    }

    /// Add one type map.
    #[must_use]
    pub fn type_map(mut self, type_map: TypeMap) -> Self {
        self.type_maps.push(type_map);
        self
    }

    /// Add several type maps.
    #[must_use]
    pub fn type_maps(mut self, type_maps: impl IntoIterator<Item = TypeMap>) -> Self {
        self.type_maps.extend(type_maps);
        self
    }

    /// Validate the type maps and build the mapper.
    pub fn build(self) -> Result<Mapper> {
        Mapper::new(self.type_maps, self.options)
    }
}
