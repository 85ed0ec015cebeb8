// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for TypeDescriptor.

use crate::dynamic::{DynamicValue, FieldDescriptor, PrimitiveKind, TypeDescriptor};
use std::sync::Arc;

/// Builder for creating struct TypeDescriptor instances.
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptorBuilder {
    /// Create a new builder for a struct type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a primitive field.
    pub fn field(mut self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        let type_desc = Arc::new(TypeDescriptor::primitive(kind));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a string field.
    pub fn string_field(self, name: impl Into<String>) -> Self {
        self.field(name, PrimitiveKind::String)
    }

    /// Add a field with a type descriptor.
    pub fn field_with_type(
        mut self,
        name: impl Into<String>,
        type_desc: Arc<TypeDescriptor>,
    ) -> Self {
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add an optional field of the given type.
    pub fn optional_field(mut self, name: impl Into<String>, inner: Arc<TypeDescriptor>) -> Self {
        let type_desc = Arc::new(TypeDescriptor::optional(inner));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a field that falls back to `default` when it cannot be sourced.
    pub fn default_field(
        mut self,
        name: impl Into<String>,
        type_desc: Arc<TypeDescriptor>,
        default: impl Into<DynamicValue>,
    ) -> Self {
        self.fields
            .push(FieldDescriptor::new(name, type_desc).with_default(default));
        self
    }

    /// Add a sequence field.
    pub fn sequence_field(mut self, name: impl Into<String>, element: Arc<TypeDescriptor>) -> Self {
        let type_desc = Arc::new(TypeDescriptor::sequence(element));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a prebuilt field descriptor.
    pub fn push(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the TypeDescriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::struct_type(self.name, self.fields)
    }
}

/// Builder for abstract (closed variant set) types.
#[derive(Debug)]
pub struct AbstractTypeBuilder {
    name: String,
    variants: Vec<Arc<TypeDescriptor>>,
}

impl AbstractTypeBuilder {
    /// Create a new abstract type builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    /// Add a concrete variant.
    pub fn variant(mut self, variant: Arc<TypeDescriptor>) -> Self {
        self.variants.push(variant);
        self
    }

    /// Add a singleton variant.
    pub fn singleton(self, name: impl Into<String>) -> Self {
        self.variant(Arc::new(TypeDescriptor::singleton(name)))
    }

    /// Build the TypeDescriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::abstract_type(self.name, self.variants)
    }
}
