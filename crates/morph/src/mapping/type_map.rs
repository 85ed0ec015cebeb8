// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Explicit source -> target type pairs and per-property overrides.

use crate::dynamic::{DynamicValue, TypeDescriptor};
use crate::{Mappable, MappingError, Result};
use std::fmt;
use std::sync::Arc;

/// Pure function applied to one source field value.
pub type TransformFn = Arc<dyn Fn(&DynamicValue) -> Result<DynamicValue> + Send + Sync>;

/// Overrides default name matching for one target field.
#[derive(Clone)]
pub struct PropertyOverride {
    /// Field read from the concrete source type.
    pub source_field: String,
    /// Field written on the target type.
    pub target_field: String,
    /// Transform; `None` recursively maps the source field (a rename).
    pub transform: Option<TransformFn>,
}

impl PropertyOverride {
    /// Map `source_field` into `target_field` with the default recursive mapping.
    pub fn rename(source_field: impl Into<String>, target_field: impl Into<String>) -> Self {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
            transform: None,
        }
    }

    /// Compute `target_field` from `source_field` with a dynamic transform.
    pub fn transform<F>(
        source_field: impl Into<String>,
        target_field: impl Into<String>,
        transform: F,
    ) -> Self
    where
        F: Fn(&DynamicValue) -> Result<DynamicValue> + Send + Sync + 'static,
    {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
            transform: Some(Arc::new(transform)),
        }
    }

    /// Compute `target_field` from `source_field` with a typed transform.
    ///
    /// ```rust
    /// use morph::PropertyOverride;
    ///
    /// let upper = PropertyOverride::typed("name", "display_name", |name: String| {
    ///     name.to_uppercase()
    /// });
    /// assert!(upper.transform.is_some());
    /// ```
    pub fn typed<A, B, F>(
        source_field: impl Into<String>,
        target_field: impl Into<String>,
        transform: F,
    ) -> Self
    where
        A: Mappable,
        B: Mappable,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self::transform(source_field, target_field, move |value| {
            let input = A::from_dynamic(value.clone())?;
            Ok(transform(input).to_dynamic())
        })
    }

    /// Run the transform (if any).
    pub(crate) fn apply(&self, value: &DynamicValue) -> Option<Result<DynamicValue>> {
        self.transform.as_ref().map(|f| f(value))
    }
}

impl fmt::Debug for PropertyOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyOverride")
            .field("source_field", &self.source_field)
            .field("target_field", &self.target_field)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// An explicit rule pairing one concrete source type with one concrete
/// target type.
#[derive(Debug, Clone)]
pub struct TypeMap {
    source: Arc<TypeDescriptor>,
    target: Arc<TypeDescriptor>,
    overrides: Vec<PropertyOverride>,
}

impl TypeMap {
    /// Pair two `Mappable` types.
    pub fn new<S: Mappable, T: Mappable>() -> Self {
        Self::between(S::descriptor(), T::descriptor())
    }

    /// Pair two descriptors.
    pub fn between(source: Arc<TypeDescriptor>, target: Arc<TypeDescriptor>) -> Self {
        Self {
            source,
            target,
            overrides: Vec::new(),
        }
    }

    /// Attach a property override.
    #[must_use]
    pub fn with_override(mut self, property: PropertyOverride) -> Self {
        self.overrides.push(property);
        self
    }

    pub fn source(&self) -> &Arc<TypeDescriptor> {
        &self.source
    }

    pub fn target(&self) -> &Arc<TypeDescriptor> {
        &self.target
    }

    pub fn source_type(&self) -> &str {
        &self.source.name
    }

    pub fn target_type(&self) -> &str {
        &self.target.name
    }

    pub fn overrides(&self) -> &[PropertyOverride] {
        &self.overrides
    }

    /// Override writing `target_field`, if any.
    pub fn override_for(&self, target_field: &str) -> Option<&PropertyOverride> {
        self.overrides
            .iter()
            .find(|o| o.target_field == target_field)
    }

    /// Check shape constraints that do not depend on other type maps.
    pub(crate) fn validate(&self) -> Result<()> {
        for (side, desc) in [("source", &self.source), ("target", &self.target)] {
            if !desc.is_concrete_object() {
                return Err(MappingError::invalid_config(format!(
                    "type map {} -> {}: {} must be a struct or singleton, got {}",
                    self.source.name,
                    self.target.name,
                    side,
                    desc.describe()
                )));
            }
        }

        for (i, property) in self.overrides.iter().enumerate() {
            if self.target.field(&property.target_field).is_none() {
                return Err(MappingError::invalid_config(format!(
                    "type map {} -> {}: override writes unknown field {}",
                    self.source.name, self.target.name, property.target_field
                )));
            }
            let duplicate = self.overrides[..i]
                .iter()
                .any(|o| o.target_field == property.target_field);
            if duplicate {
                return Err(MappingError::invalid_config(format!(
                    "type map {} -> {}: field {} overridden twice",
                    self.source.name, self.target.name, property.target_field
                )));
            }
        }
        Ok(())
    }
}
