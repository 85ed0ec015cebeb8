// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value types.

use crate::dynamic::PrimitiveKind;
use std::collections::HashMap;

/// Field values of one struct instance, tagged with its concrete type.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    /// Concrete type name (matches a struct `TypeDescriptor::name`).
    pub type_name: String,
    /// Field values by name.
    pub fields: HashMap<String, DynamicValue>,
}

impl StructValue {
    /// Create an empty struct value.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: DynamicValue) {
        self.fields.insert(name.into(), value);
    }

    /// Borrow a field value.
    pub fn field(&self, name: &str) -> Option<&DynamicValue> {
        self.fields.get(name)
    }

    /// Move a field value out, leaving nothing behind.
    pub fn take_field(&mut self, name: &str) -> Option<DynamicValue> {
        self.fields.remove(name)
    }
}

/// A dynamic value that can hold any mappable type.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    // Primitives
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),

    // Composites
    Struct(StructValue),
    Singleton(String), // concrete type name
    Sequence(Vec<DynamicValue>),

    // Special
    Null,
}

impl DynamicValue {
    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Primitive kind of this value, if it is a primitive.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        Some(match self {
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::U8(_) => PrimitiveKind::U8,
            Self::U16(_) => PrimitiveKind::U16,
            Self::U32(_) => PrimitiveKind::U32,
            Self::U64(_) => PrimitiveKind::U64,
            Self::I8(_) => PrimitiveKind::I8,
            Self::I16(_) => PrimitiveKind::I16,
            Self::I32(_) => PrimitiveKind::I32,
            Self::I64(_) => PrimitiveKind::I64,
            Self::F32(_) => PrimitiveKind::F32,
            Self::F64(_) => PrimitiveKind::F64,
            Self::Char(_) => PrimitiveKind::Char,
            Self::String(_) => PrimitiveKind::String,
            _ => return None,
        })
    }

    /// Concrete type name carried by struct and singleton values.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Struct(s) => Some(&s.type_name),
            Self::Singleton(name) => Some(name),
            _ => None,
        }
    }

    /// Short description of the value's shape, for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::Struct(s) => format!("struct {}", s.type_name),
            Self::Singleton(name) => format!("singleton {}", name),
            Self::Sequence(items) => format!("sequence of {}", items.len()),
            Self::Null => "null".to_string(),
            other => other
                .primitive_kind()
                .map(|k| k.name().to_string())
                .unwrap_or_default(),
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as sequence.
    pub fn as_sequence(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as struct.
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get struct field.
    pub fn get_field(&self, name: &str) -> Option<&DynamicValue> {
        self.as_struct()?.field(name)
    }
}

macro_rules! primitive_conversions {
    ($($ty:ty => $variant:ident, $getter:ident;)*) => {
        impl DynamicValue {
            $(
                #[doc = concat!("Copy out the `", stringify!($ty), "` payload, if any.")]
                pub fn $getter(&self) -> Option<$ty> {
                    match self {
                        Self::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl From<$ty> for DynamicValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

primitive_conversions! {
    bool => Bool, as_bool;
    u8 => U8, as_u8;
    u16 => U16, as_u16;
    u32 => U32, as_u32;
    u64 => U64, as_u64;
    i8 => I8, as_i8;
    i16 => I16, as_i16;
    i32 => I32, as_i32;
    i64 => I64, as_i64;
    f32 => F32, as_f32;
    f64 => F64, as_f64;
    char => Char, as_char;
}

impl From<String> for DynamicValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<StructValue> for DynamicValue {
    fn from(v: StructValue) -> Self {
        Self::Struct(v)
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}
