// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural matching of a concrete source type against candidate targets.
//!
//! A candidate struct matches when every one of its fields is satisfied:
//! - the candidate field is optional or has a default, or
//! - a same-named source field exists with an assignable type.
//!
//! Matching is by field name only; fields with a matching type but a
//! different name are never paired. Singleton candidates never match
//! structurally (a zero-field type would match anything); a singleton source
//! only matches the candidate that is its own type.

use crate::dynamic::{TypeDescriptor, TypeKind};
use std::sync::Arc;

/// Result of selecting a dynamic target among candidates.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'t> {
    /// Exactly one candidate matches.
    Unique(&'t TypeDescriptor),
    /// No candidate matches.
    NoMatch,
    /// Several candidates match; names in declaration order.
    Ambiguous(Vec<String>),
}

/// Stateless structural matcher.
pub struct StructuralMatcher;

impl StructuralMatcher {
    /// Select the unique candidate that `source` (a concrete type) can be
    /// mapped into.
    pub fn select<'t>(
        source: &TypeDescriptor,
        candidates: &'t [Arc<TypeDescriptor>],
    ) -> MatchOutcome<'t> {
        if source.is_singleton() {
            return candidates
                .iter()
                .find(|c| c.is_singleton() && c.name == source.name)
                .map_or(MatchOutcome::NoMatch, |c| MatchOutcome::Unique(c.as_ref()));
        }

        let matches: Vec<&'t TypeDescriptor> = candidates
            .iter()
            .filter(|c| c.is_struct() && Self::is_structural_match(source, c))
            .map(|c| c.as_ref())
            .collect();

        match matches.as_slice() {
            [] => MatchOutcome::NoMatch,
            [only] => MatchOutcome::Unique(*only),
            many => MatchOutcome::Ambiguous(many.iter().map(|c| c.name.clone()).collect()),
        }
    }

    /// Whether every required field of `candidate` can be satisfied from
    /// `source`. Optional and defaulted fields always are.
    pub fn is_structural_match(source: &TypeDescriptor, candidate: &TypeDescriptor) -> bool {
        let Some(candidate_fields) = candidate.fields() else {
            return false;
        };

        candidate_fields.iter().all(|field| {
            field.is_omittable()
                || source.field(&field.name).is_some_and(|source_field| {
                    Self::is_assignable(&source_field.type_desc, &field.type_desc)
                })
        })
    }

    /// Shape-level assignability of a source field type to a target field type.
    pub fn is_assignable(source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
        match (&source.kind, &target.kind) {
            (TypeKind::Optional(s), TypeKind::Optional(t)) => Self::is_assignable(s, t),
            (_, TypeKind::Optional(t)) => Self::is_assignable(source, t),
            (TypeKind::Optional(_), _) => false,
            (TypeKind::Primitive(s), TypeKind::Primitive(t)) => s == t,
            (TypeKind::Sequence(s), TypeKind::Sequence(t)) => {
                Self::is_assignable(&s.element_type, &t.element_type)
            }
            // Composite pairs are settled by the recursive mapping.
            _ => source.is_object() && target.is_object(),
        }
    }
}
