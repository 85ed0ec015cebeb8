// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bridge between Rust types and the dynamic type model.
//!
//! Every type that takes part in a mapping implements [`Mappable`]: it
//! describes its shape with a [`TypeDescriptor`] and converts to and from
//! [`DynamicValue`]. Primitives, `String`, `Vec<T>`, `Option<T>` and
//! `Box<T>` are covered here; user structs and enums use
//! `#[derive(Mappable)]`.

use crate::dynamic::{DynamicValue, PrimitiveKind, StructValue, TypeDescriptor};
use crate::{MappingError, Result};
use std::sync::Arc;

/// A type the mapper can describe, read and rebuild.
pub trait Mappable: Sized {
    /// Runtime shape of the type.
    fn descriptor() -> Arc<TypeDescriptor>;

    /// Convert to a dynamic value tree.
    fn to_dynamic(&self) -> DynamicValue;

    /// Rebuild from a dynamic value tree.
    fn from_dynamic(value: DynamicValue) -> Result<Self>;
}

macro_rules! impl_primitive {
    ($ty:ty, $kind:ident) => {
        impl Mappable for $ty {
            fn descriptor() -> Arc<TypeDescriptor> {
                Arc::new(TypeDescriptor::primitive(PrimitiveKind::$kind))
            }

            fn to_dynamic(&self) -> DynamicValue {
                DynamicValue::$kind(self.clone())
            }

            fn from_dynamic(value: DynamicValue) -> Result<Self> {
                match value {
                    DynamicValue::$kind(v) => Ok(v),
                    other => Err(mismatch(PrimitiveKind::$kind.name(), &other)),
                }
            }
        }
    };
}

impl_primitive!(bool, Bool);
impl_primitive!(u8, U8);
impl_primitive!(u16, U16);
impl_primitive!(u32, U32);
impl_primitive!(u64, U64);
impl_primitive!(i8, I8);
impl_primitive!(i16, I16);
impl_primitive!(i32, I32);
impl_primitive!(i64, I64);
impl_primitive!(f32, F32);
impl_primitive!(f64, F64);
impl_primitive!(char, Char);
impl_primitive!(String, String);

impl<T: Mappable> Mappable for Vec<T> {
    fn descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::sequence(T::descriptor()))
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Sequence(self.iter().map(T::to_dynamic).collect())
    }

    fn from_dynamic(value: DynamicValue) -> Result<Self> {
        match value {
            DynamicValue::Sequence(items) => items.into_iter().map(T::from_dynamic).collect(),
            other => Err(mismatch("sequence", &other)),
        }
    }
}

impl<T: Mappable> Mappable for Option<T> {
    fn descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::optional(T::descriptor()))
    }

    fn to_dynamic(&self) -> DynamicValue {
        match self {
            Some(v) => v.to_dynamic(),
            None => DynamicValue::Null,
        }
    }

    fn from_dynamic(value: DynamicValue) -> Result<Self> {
        match value {
            DynamicValue::Null => Ok(None),
            other => T::from_dynamic(other).map(Some),
        }
    }
}

impl<T: Mappable> Mappable for Box<T> {
    fn descriptor() -> Arc<TypeDescriptor> {
        T::descriptor()
    }

    fn to_dynamic(&self) -> DynamicValue {
        T::to_dynamic(self)
    }

    fn from_dynamic(value: DynamicValue) -> Result<Self> {
        T::from_dynamic(value).map(Box::new)
    }
}

fn mismatch(expected: &str, found: &DynamicValue) -> MappingError {
    MappingError::conversion(expected, format!("found {}", found.describe()))
}

/// Unwrap a struct value of the given concrete type. Used by generated code.
pub fn expect_struct(value: DynamicValue, type_name: &str) -> Result<StructValue> {
    match value {
        DynamicValue::Struct(s) if s.type_name == type_name => Ok(s),
        other => Err(mismatch(type_name, &other)),
    }
}

/// Check a singleton value of the given concrete type. Used by generated code.
pub fn expect_singleton(value: DynamicValue, type_name: &str) -> Result<()> {
    match value {
        DynamicValue::Singleton(name) if name == type_name => Ok(()),
        other => Err(mismatch(type_name, &other)),
    }
}

/// Error for a value that is none of an enum's variants. Used by generated code.
pub fn unknown_variant(type_name: &str, found: &DynamicValue) -> MappingError {
    MappingError::conversion(type_name, format!("no variant for {}", found.describe()))
}

/// Move one field out of a struct value and rebuild it. A missing field
/// reads as `Null`, which only `Option<T>` accepts. Used by generated code.
pub fn take_field<T: Mappable>(value: &mut StructValue, field: &str) -> Result<T> {
    let raw = value.take_field(field).unwrap_or(DynamicValue::Null);
    T::from_dynamic(raw).map_err(|e| {
        MappingError::conversion(value.type_name.clone(), format!("field {}: {}", field, e))
    })
}

/// Like [`take_field`], but a missing or `Null` field uses `default`.
pub fn take_field_or<T: Mappable>(
    value: &mut StructValue,
    field: &str,
    default: impl FnOnce() -> T,
) -> Result<T> {
    match value.take_field(field) {
        None | Some(DynamicValue::Null) => Ok(default()),
        Some(raw) => T::from_dynamic(raw).map_err(|e| {
            MappingError::conversion(value.type_name.clone(), format!("field {}: {}", field, e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_descriptors() {
        assert_eq!(u32::descriptor().name, "u32");
        assert_eq!(String::descriptor().name, "string");
        assert_eq!(<Vec<i64>>::descriptor().name, "sequence<i64>");
        assert_eq!(<Option<bool>>::descriptor().name, "optional<bool>");
        assert_eq!(<Box<f64>>::descriptor().name, "f64");
    }

    #[test]
    fn test_primitive_conversion() {
        assert_eq!(42u32.to_dynamic(), DynamicValue::U32(42));
        assert_eq!(u32::from_dynamic(DynamicValue::U32(7)), Ok(7));
        assert!(u32::from_dynamic(DynamicValue::I32(7)).is_err());
        assert_eq!(
            String::from_dynamic("don pablo".into()),
            Ok("don pablo".to_string())
        );
    }

    #[test]
    fn test_option_and_vec() {
        let some: Option<u8> = Some(3);
        assert_eq!(some.to_dynamic(), DynamicValue::U8(3));
        assert_eq!(None::<u8>.to_dynamic(), DynamicValue::Null);
        assert_eq!(<Option<u8>>::from_dynamic(DynamicValue::Null), Ok(None));

        let items = vec![1i16, 2, 3];
        let dynamic = items.to_dynamic();
        assert_eq!(<Vec<i16>>::from_dynamic(dynamic), Ok(items));
    }

    #[test]
    fn test_take_field_reports_field_name() {
        let mut value = StructValue::new("Person").with_field("age", "old");
        let err = take_field::<u32>(&mut value, "age").unwrap_err();
        assert!(err.to_string().contains("field age"));

        let mut value = StructValue::new("Person");
        assert_eq!(take_field::<Option<u32>>(&mut value, "age"), Ok(None));
        assert_eq!(take_field_or(&mut value, "age", || 18u32), Ok(18));
    }

    #[test]
    fn test_expect_struct_checks_type_name() {
        let value = DynamicValue::from(StructValue::new("A"));
        assert!(expect_struct(value.clone(), "A").is_ok());
        assert!(expect_struct(value, "B").is_err());
        assert!(expect_singleton(DynamicValue::Singleton("S".into()), "S").is_ok());
    }
}
