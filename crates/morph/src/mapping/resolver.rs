// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Target type resolution.
//!
//! Order is fixed: explicit type map, then structural match (when
//! `dynamic_type_mapping` is enabled), then identity passthrough (when
//! `identity_type_mapping` is enabled), then failure. A concrete declared
//! target short-circuits the abstract-type logic, and so does an abstract
//! target equal to the declared source when identity is enabled.

use crate::dynamic::{DynamicValue, TypeDescriptor};
use crate::mapping::matcher::{MatchOutcome, StructuralMatcher};
use crate::mapping::{MappingContext, TypeMap};
use crate::{MappingError, Result};

/// How to produce the target value for one source object.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedMapping<'r> {
    /// Map fields into `target`, applying `type_map` overrides when present.
    /// `type_map` is `None` when the declared target was already concrete.
    Explicit {
        type_map: Option<&'r TypeMap>,
        target: &'r TypeDescriptor,
    },
    /// Return the source value unchanged.
    Identity,
    /// Map fields into a structurally matched variant.
    Dynamic(&'r TypeDescriptor),
    /// Nothing applies.
    Unresolvable,
}

/// Resolution result: the concrete source type and the chosen mapping.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'r> {
    pub source: &'r TypeDescriptor,
    pub mapping: ResolvedMapping<'r>,
}

/// Stateless type resolver.
pub struct TypeResolver;

impl TypeResolver {
    /// Resolve how `value`, declared as `declared_source`, maps into
    /// `declared_target`. Both declared types must be objects (struct,
    /// singleton or abstract).
    pub fn resolve<'r>(
        ctx: &MappingContext<'r>,
        value: &DynamicValue,
        declared_source: &'r TypeDescriptor,
        declared_target: &'r TypeDescriptor,
    ) -> Result<Resolution<'r>> {
        let source = Self::concrete_source(ctx, value, declared_source)?;

        let mapping = if declared_target.is_abstract() {
            Self::resolve_abstract(ctx, source, declared_source, declared_target)?
        } else {
            Self::resolve_concrete(ctx, source, declared_target)
        };

        log::trace!(
            "{}: {} -> {} resolved as {:?}",
            ctx.path(),
            source.name,
            declared_target.name,
            Kind::of(&mapping)
        );
        Ok(Resolution { source, mapping })
    }

    /// Concrete descriptor of `value` within its declared type.
    fn concrete_source<'r>(
        ctx: &MappingContext<'_>,
        value: &DynamicValue,
        declared_source: &'r TypeDescriptor,
    ) -> Result<&'r TypeDescriptor> {
        value
            .type_name()
            .and_then(|name| declared_source.concrete_for(name))
            .ok_or_else(|| MappingError::TypeMismatch {
                path: ctx.path().to_string(),
                expected: declared_source.describe(),
                found: value.describe(),
            })
    }

    fn resolve_concrete<'r>(
        ctx: &MappingContext<'r>,
        source: &'r TypeDescriptor,
        target: &'r TypeDescriptor,
    ) -> ResolvedMapping<'r> {
        if let Some(type_map) = ctx.registry().lookup(&source.name, &target.name) {
            return ResolvedMapping::Explicit {
                type_map: Some(type_map),
                target,
            };
        }
        if ctx.options().identity_enabled() && source.name == target.name {
            return ResolvedMapping::Identity;
        }
        ResolvedMapping::Explicit {
            type_map: None,
            target,
        }
    }

    fn resolve_abstract<'r>(
        ctx: &MappingContext<'r>,
        source: &'r TypeDescriptor,
        declared_source: &TypeDescriptor,
        target: &'r TypeDescriptor,
    ) -> Result<ResolvedMapping<'r>> {
        let explicit = ctx.registry().lookup_variants(&source.name, target);
        match explicit.as_slice() {
            [] => {}
            &[type_map] => {
                return Ok(ResolvedMapping::Explicit {
                    type_map: Some(type_map),
                    target: type_map.target(),
                })
            }
            many => {
                return Err(MappingError::AmbiguousTypeMap {
                    path: ctx.path().to_string(),
                    source_type: source.name.clone(),
                    candidates: many.iter().map(|m| m.target_type().to_string()).collect(),
                })
            }
        }

        // Same declared type on both sides is an exact pair, like a concrete
        // target with no type map.
        let same_declared = declared_source.name == target.name;
        if same_declared && ctx.options().identity_enabled() {
            return Ok(ResolvedMapping::Identity);
        }

        let variants = target.variants().unwrap_or_default();

        if ctx.options().dynamic_enabled() {
            match StructuralMatcher::select(source, variants) {
                MatchOutcome::Unique(candidate) => return Ok(ResolvedMapping::Dynamic(candidate)),
                MatchOutcome::Ambiguous(candidates) => {
                    return Err(MappingError::AmbiguousDynamicMapping {
                        path: ctx.path().to_string(),
                        source_type: source.name.clone(),
                        candidates,
                    })
                }
                MatchOutcome::NoMatch => {
                    log::debug!(
                        "{}: no structural match for {} among {} variants of {}",
                        ctx.path(),
                        source.name,
                        variants.len(),
                        target.name
                    );
                }
            }
        }

        if ctx.options().identity_enabled() && variants.iter().any(|v| v.name == source.name) {
            return Ok(ResolvedMapping::Identity);
        }

        Ok(ResolvedMapping::Unresolvable)
    }
}

/// Variant tag for trace logging.
#[derive(Debug)]
enum Kind<'a> {
    Explicit(Option<&'a str>),
    Identity,
    Dynamic(&'a str),
    Unresolvable,
}

impl<'a> Kind<'a> {
    fn of(mapping: &ResolvedMapping<'a>) -> Self {
        match mapping {
            ResolvedMapping::Explicit { type_map, .. } => {
                Self::Explicit(type_map.map(|m| m.target_type()))
            }
            ResolvedMapping::Identity => Self::Identity,
            ResolvedMapping::Dynamic(target) => Self::Dynamic(&target.name),
            ResolvedMapping::Unresolvable => Self::Unresolvable,
        }
    }
}
