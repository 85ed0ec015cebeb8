// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type model for the mapper.
//!
//! Mapping operates on type-erased values described by descriptors, so the
//! engine can walk any pair of type hierarchies without compile-time
//! knowledge of either.
//!
//! # Features
//!
//! - **TypeDescriptor**: Runtime type description (primitives, structs,
//!   singletons, sequences, optionals, abstract variant sets)
//! - **DynamicValue**: Type-erased value tree tagged with concrete type names
//! - **Builders**: `TypeDescriptorBuilder` for structs, `AbstractTypeBuilder`
//!   for variant sets
//!
//! # Example
//!
//! ```rust
//! use morph::dynamic::{DynamicValue, PrimitiveKind, StructValue, TypeDescriptorBuilder};
//!
//! let customer = TypeDescriptorBuilder::new("Customer")
//!     .field("id", PrimitiveKind::U64)
//!     .string_field("name")
//!     .build();
//!
//! let value = DynamicValue::from(
//!     StructValue::new("Customer")
//!         .with_field("id", 7u64)
//!         .with_field("name", "Ada"),
//! );
//!
//! assert_eq!(value.type_name(), Some(customer.name.as_str()));
//! assert_eq!(value.get_field("id").and_then(|v| v.as_u64()), Some(7));
//! ```

mod builder;
mod type_descriptor;
mod value;

pub use builder::{AbstractTypeBuilder, TypeDescriptorBuilder};
pub use type_descriptor::{
    AbstractDescriptor, FieldDescriptor, PrimitiveKind, SequenceDescriptor, TypeDescriptor,
    TypeKind,
};
pub use value::{DynamicValue, StructValue};
