// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapping engine.
//!
//! - [`TypeMapRegistry`] stores explicit [`TypeMap`]s and their
//!   [`PropertyOverride`]s.
//! - [`TypeResolver`] picks the concrete target for each source object.
//! - [`StructuralMatcher`] implements dynamic (shape-based) target selection.
//! - [`PropertyMapper`] walks the value tree and fills target fields.
//!
//! Everything here is read-only once a [`crate::Mapper`] is built; per-call
//! state lives in [`MappingContext`].

mod context;
mod matcher;
mod property;
mod registry;
mod resolver;
mod type_map;

pub use context::MappingContext;
pub use matcher::{MatchOutcome, StructuralMatcher};
pub use property::PropertyMapper;
pub use registry::TypeMapRegistry;
pub use resolver::{Resolution, ResolvedMapping, TypeResolver};
pub use type_map::{PropertyOverride, TransformFn, TypeMap};
