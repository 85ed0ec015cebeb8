// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.

use crate::dynamic::DynamicValue;
use std::fmt;
use std::sync::Arc;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
    String,
}

impl PrimitiveKind {
    /// Canonical type name, also used as the descriptor name for primitives.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type kind enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Primitive type (copied as-is).
    Primitive(PrimitiveKind),
    /// Struct with named fields, in declaration order.
    Struct(Vec<FieldDescriptor>),
    /// Stateless type with exactly one value and no fields.
    Singleton,
    /// Sequence (dynamic length).
    Sequence(SequenceDescriptor),
    /// Value that may be absent.
    Optional(Arc<TypeDescriptor>),
    /// Closed set of concrete variants (trait-like / sum type).
    Abstract(AbstractDescriptor),
}

/// A complete type descriptor.
///
/// The `name` is the type identity: two descriptors with the same name are
/// treated as the same declared type by the mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Create a new type descriptor.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a primitive type descriptor named after its kind.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(kind.name(), TypeKind::Primitive(kind))
    }

    /// Create a struct type descriptor.
    pub fn struct_type(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self::new(name, TypeKind::Struct(fields))
    }

    /// Create a singleton type descriptor.
    pub fn singleton(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Singleton)
    }

    /// Create a sequence descriptor named `sequence<elem>`.
    pub fn sequence(element_type: Arc<TypeDescriptor>) -> Self {
        let name = format!("sequence<{}>", element_type.name);
        Self::new(name, TypeKind::Sequence(SequenceDescriptor::new(element_type)))
    }

    /// Create an optional descriptor named `optional<inner>`.
    pub fn optional(inner: Arc<TypeDescriptor>) -> Self {
        let name = format!("optional<{}>", inner.name);
        Self::new(name, TypeKind::Optional(inner))
    }

    /// Create an abstract type descriptor over a closed variant set.
    pub fn abstract_type(name: impl Into<String>, variants: Vec<Arc<TypeDescriptor>>) -> Self {
        Self::new(name, TypeKind::Abstract(AbstractDescriptor::new(variants)))
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_))
    }

    /// Check if this is a singleton type.
    pub fn is_singleton(&self) -> bool {
        matches!(self.kind, TypeKind::Singleton)
    }

    /// Check if this is an abstract type.
    pub fn is_abstract(&self) -> bool {
        matches!(self.kind, TypeKind::Abstract(_))
    }

    /// Check if this is an optional type.
    pub fn is_optional(&self) -> bool {
        matches!(self.kind, TypeKind::Optional(_))
    }

    /// Struct or singleton: something the property mapper can instantiate.
    pub fn is_concrete_object(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_) | TypeKind::Singleton)
    }

    /// Struct, singleton or abstract.
    pub fn is_object(&self) -> bool {
        self.is_concrete_object() || self.is_abstract()
    }

    /// Get fields if this is a struct. Singletons report an empty field list.
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        match &self.kind {
            TypeKind::Struct(fields) => Some(fields),
            TypeKind::Singleton => Some(&[]),
            _ => None,
        }
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields()?.iter().find(|f| f.name == name)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields()?.iter().position(|f| f.name == name)
    }

    /// Variants if this is an abstract type.
    pub fn variants(&self) -> Option<&[Arc<TypeDescriptor>]> {
        match &self.kind {
            TypeKind::Abstract(a) => Some(&a.variants),
            _ => None,
        }
    }

    /// Find the concrete descriptor named `type_name` that this declared
    /// type admits: itself when concrete, one of its variants when abstract.
    pub fn concrete_for(&self, type_name: &str) -> Option<&TypeDescriptor> {
        match &self.kind {
            TypeKind::Struct(_) | TypeKind::Singleton if self.name == type_name => Some(self),
            TypeKind::Abstract(a) => a.variant(type_name),
            _ => None,
        }
    }

    /// Strip one level of `Optional`.
    pub fn unwrap_optional(&self) -> &TypeDescriptor {
        match &self.kind {
            TypeKind::Optional(inner) => inner,
            _ => self,
        }
    }

    /// Short human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match &self.kind {
            TypeKind::Primitive(p) => p.name().to_string(),
            TypeKind::Struct(_) => format!("struct {}", self.name),
            TypeKind::Singleton => format!("singleton {}", self.name),
            TypeKind::Abstract(_) => format!("abstract {}", self.name),
            TypeKind::Sequence(_) | TypeKind::Optional(_) => self.name.clone(),
        }
    }
}

/// Field descriptor for struct members.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_desc: Arc<TypeDescriptor>,
    /// Field may be absent (`Option<T>`).
    pub optional: bool,
    /// Default value (if any).
    pub default: Option<DynamicValue>,
}

impl FieldDescriptor {
    /// Create a new field descriptor. Optionality follows the field type.
    pub fn new(name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        let optional = type_desc.is_optional();
        Self {
            name: name.into(),
            type_desc,
            optional,
            default: None,
        }
    }

    /// Mark as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set default value.
    pub fn with_default(mut self, default: impl Into<DynamicValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether the field may be left out of a mapping.
    pub fn is_omittable(&self) -> bool {
        self.optional || self.default.is_some()
    }

    /// Value used when the field cannot be sourced: the default, or `Null`
    /// for optional fields.
    pub fn fallback(&self) -> Option<DynamicValue> {
        match &self.default {
            Some(default) => Some(default.clone()),
            None if self.optional => Some(DynamicValue::Null),
            None => None,
        }
    }
}

/// Sequence type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDescriptor {
    /// Element type.
    pub element_type: Arc<TypeDescriptor>,
}

impl SequenceDescriptor {
    /// Create sequence descriptor.
    pub fn new(element_type: Arc<TypeDescriptor>) -> Self {
        Self { element_type }
    }
}

/// Abstract type descriptor: the closed set of concrete variants.
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractDescriptor {
    /// Concrete variants (structs or singletons), in declaration order.
    pub variants: Vec<Arc<TypeDescriptor>>,
}

impl AbstractDescriptor {
    /// Create abstract descriptor.
    ///
    /// A nested abstract variant is replaced by its own concrete variants,
    /// so values of the nested type resolve through the outer one. The
    /// first variant with a given name wins.
    pub fn new(variants: Vec<Arc<TypeDescriptor>>) -> Self {
        let mut flat: Vec<Arc<TypeDescriptor>> = Vec::with_capacity(variants.len());
        let mut push = |variant: Arc<TypeDescriptor>| {
            if !flat.iter().any(|v| v.name == variant.name) {
                flat.push(variant);
            }
        };
        for variant in variants {
            if let TypeKind::Abstract(nested) = &variant.kind {
                nested.variants.iter().cloned().for_each(&mut push);
                continue;
            }
            push(variant);
        }
        Self { variants: flat }
    }

    /// Get variant by type name.
    pub fn variant(&self, name: &str) -> Option<&TypeDescriptor> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.as_ref())
    }

    /// Whether `name` is one of the variants.
    pub fn contains(&self, name: &str) -> bool {
        self.variants.iter().any(|v| v.name == name)
    }
}
