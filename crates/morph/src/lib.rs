// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Morph - object-graph mapping between type hierarchies
//!
//! Maps a value of one type hierarchy into an isomorphic hierarchy (domain
//! model to DTO and back), including hierarchies built on abstract types
//! whose concrete variant is only known at runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use morph::{Mappable, Mapper, MappingOptions, PropertyOverride, Result, TypeMap};
//!
//! #[derive(Debug, Mappable)]
//! struct Card { id: u32, number: String }
//!
//! #[derive(Debug, Mappable)]
//! struct Iban { id: u32, iban: String }
//!
//! #[derive(Debug, Mappable)]
//! enum Payment { Card(Card), Iban(Iban) }
//!
//! #[derive(Debug, Mappable)]
//! struct CardDto { id: u32, masked: String }
//!
//! #[derive(Debug, Mappable)]
//! struct IbanDto { id: u32, iban: String }
//!
//! #[derive(Debug, Mappable)]
//! enum PaymentDto { Card(CardDto), Iban(IbanDto) }
//!
//! fn main() -> Result<()> {
//!     let mapper = Mapper::builder()
//!         .type_map(TypeMap::new::<Card, CardDto>().with_override(
//!             PropertyOverride::typed("number", "masked", |n: String| {
//!                 format!("**** {}", &n[n.len() - 4..])
//!             }),
//!         ))
//!         .options(MappingOptions::new().dynamic_type_mapping(true))
//!         .build()?;
//!
//!     let payments = vec![
//!         Payment::Card(Card { id: 1, number: "4242424242424242".into() }),
//!         Payment::Iban(Iban { id: 2, iban: "FR7630006000011234567890189".into() }),
//!     ];
//!     let dtos: Vec<PaymentDto> = mapper.map(&payments)?;
//!
//!     match &dtos[0] {
//!         PaymentDto::Card(card) => assert_eq!(card.masked, "**** 4242"),
//!         other => panic!("unexpected {:?}", other),
//!     }
//!     assert!(matches!(dtos[1], PaymentDto::Iban(_)));
//!     Ok(())
//! }
//! ```
//!
//! ## Resolution
//!
//! For each source object the target type is chosen in a fixed order:
//!
//! 1. an explicit [`TypeMap`] from the source's concrete type,
//! 2. a unique structural match among the target's variants
//!    (`dynamic_type_mapping`),
//! 3. identity passthrough when source and target types coincide
//!    (`identity_type_mapping`),
//! 4. otherwise [`MappingError::UnresolvableAbstractType`]. On an optional or
//!    defaulted field that error is absorbed and the field is left out.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Mapper`] | Immutable, thread-safe mapping facade |
//! | [`TypeMap`] | Explicit source -> target type pair |
//! | [`PropertyOverride`] | Per-field rename or transform |
//! | [`MappingOptions`] | Dynamic and identity resolution switches |
//! | [`Mappable`] | Bridge from Rust types to the dynamic model |
//!
//! ## Modules Overview
//!
//! - [`dynamic`] - Type descriptors and dynamic values
//! - [`mapping`] - Registry, resolver, structural matcher, property mapper
//! - [`config`] - Options, YAML and environment loading

// Allow the derive macro to work inside this crate's tests
extern crate self as morph;

/// Mapping options (code, YAML, environment).
pub mod config;
/// Runtime type model: descriptors and dynamic values.
pub mod dynamic;
/// Error type for configuration and mapping.
pub mod error;
/// `Mappable` trait and helpers used by generated code.
pub mod mappable;
/// Mapper facade and builder.
pub mod mapper;
/// Type maps, resolution and property mapping.
pub mod mapping;

pub use config::{MappingOptions, Toggle};
pub use error::{MappingError, Result};
pub use mappable::Mappable;
pub use mapper::{Mapper, MapperBuilder};
pub use mapping::{PropertyOverride, TypeMap};

// Derive macro shares the trait's name (separate namespaces).
#[cfg(feature = "derive")]
pub use morph_codegen::Mappable;
