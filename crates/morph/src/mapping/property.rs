// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive value mapping and per-field population of target objects.

use crate::dynamic::{DynamicValue, FieldDescriptor, StructValue, TypeDescriptor, TypeKind};
use crate::mapping::matcher::StructuralMatcher;
use crate::mapping::resolver::{ResolvedMapping, TypeResolver};
use crate::mapping::{MappingContext, TypeMap};
use crate::{MappingError, Result};

static NULL: DynamicValue = DynamicValue::Null;

/// Stateless property mapper.
pub struct PropertyMapper;

impl PropertyMapper {
    /// Map `value` (an instance of `source`) into a value of `target`.
    ///
    /// Primitives are copied when their kinds agree, sequences are mapped
    /// element by element, objects go through type resolution.
    pub fn map_value(
        ctx: &MappingContext<'_>,
        value: &DynamicValue,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
    ) -> Result<DynamicValue> {
        let source_inner = source.unwrap_optional();
        match &target.kind {
            TypeKind::Optional(inner) => {
                if value.is_null() {
                    Ok(DynamicValue::Null)
                } else {
                    Self::map_value(ctx, value, source_inner, inner)
                }
            }
            _ if value.is_null() => Err(mismatch(ctx, target, value)),
            TypeKind::Primitive(kind) => {
                if value.primitive_kind() == Some(*kind) {
                    Ok(value.clone())
                } else {
                    Err(mismatch(ctx, target, value))
                }
            }
            TypeKind::Sequence(target_seq) => {
                let (DynamicValue::Sequence(items), TypeKind::Sequence(source_seq)) =
                    (value, &source_inner.kind)
                else {
                    return Err(mismatch(ctx, target, value));
                };
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        Self::map_value(
                            &ctx.element(i),
                            item,
                            &source_seq.element_type,
                            &target_seq.element_type,
                        )
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(DynamicValue::Sequence)
            }
            TypeKind::Struct(_) | TypeKind::Singleton | TypeKind::Abstract(_) => {
                if !source_inner.is_object() {
                    return Err(mismatch(ctx, target, value));
                }
                Self::map_object(ctx, value, source_inner, target)
            }
        }
    }

    fn map_object(
        ctx: &MappingContext<'_>,
        value: &DynamicValue,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
    ) -> Result<DynamicValue> {
        let resolution = TypeResolver::resolve(ctx, value, source, target)?;
        match resolution.mapping {
            ResolvedMapping::Explicit { type_map, target } => {
                Self::map_fields(ctx, value, resolution.source, target, type_map)
            }
            ResolvedMapping::Dynamic(target) => {
                Self::map_fields(ctx, value, resolution.source, target, None)
            }
            ResolvedMapping::Identity => Ok(value.clone()),
            ResolvedMapping::Unresolvable => Err(MappingError::UnresolvableAbstractType {
                path: ctx.path().to_string(),
                source_type: resolution.source.name.clone(),
                target_type: target.name.clone(),
            }),
        }
    }

    /// Build a value of the concrete `target` from `value`, an instance of
    /// the concrete `source`. Every target field is filled from, in order:
    /// the type map override, the same-named source field, the field's
    /// default (or `Null` when optional).
    pub fn map_fields(
        ctx: &MappingContext<'_>,
        value: &DynamicValue,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
        type_map: Option<&TypeMap>,
    ) -> Result<DynamicValue> {
        let fields = match &target.kind {
            TypeKind::Singleton => return Ok(DynamicValue::Singleton(target.name.clone())),
            TypeKind::Struct(fields) => fields,
            _ => return Err(mismatch(ctx, target, value)),
        };

        let source_struct = match value {
            DynamicValue::Struct(s) => Some(s),
            DynamicValue::Singleton(_) => None,
            other => return Err(mismatch(ctx, target, other)),
        };

        let mut out = StructValue::new(target.name.clone());
        for field in fields {
            let field_ctx = ctx.field(&field.name);
            let mapped =
                Self::map_field(&field_ctx, source, source_struct, target, field, type_map)?;
            out.insert(field.name.clone(), mapped);
        }
        Ok(out.into())
    }

    fn map_field(
        ctx: &MappingContext<'_>,
        source: &TypeDescriptor,
        source_struct: Option<&StructValue>,
        target: &TypeDescriptor,
        field: &FieldDescriptor,
        type_map: Option<&TypeMap>,
    ) -> Result<DynamicValue> {
        let property = type_map.and_then(|m| ctx.registry().property_override_for(m, &field.name));

        if let Some(property) = property {
            let Some(source_field) = source.field(&property.source_field) else {
                return Err(MappingError::MissingOverrideSource {
                    source_type: source.name.clone(),
                    field: property.source_field.clone(),
                });
            };
            let raw = read(source_struct, &property.source_field);
            log::trace!(
                "{}: override from {}.{}",
                ctx.path(),
                source.name,
                property.source_field
            );
            let Some(result) = property.apply(raw) else {
                return Self::map_sourced(ctx, raw, source_field, target, field);
            };
            let mapped = result.map_err(|e| MappingError::Transform {
                path: ctx.path().to_string(),
                field: field.name.clone(),
                message: e.to_string(),
            })?;
            if !fits(&mapped, &field.type_desc) {
                return Err(mismatch(ctx, &field.type_desc, &mapped));
            }
            return Ok(mapped);
        }

        match source.field(&field.name) {
            Some(source_field)
                if field.is_omittable()
                    && !StructuralMatcher::is_assignable(
                        source_field.type_desc.unwrap_optional(),
                        &field.type_desc,
                    ) =>
            {
                log::trace!(
                    "{}: {} does not fit {}, using fallback",
                    ctx.path(),
                    source_field.type_desc.name,
                    field.type_desc.name
                );
                fallback(ctx, target, field)
            }
            Some(source_field) => {
                let raw = read(source_struct, &field.name);
                Self::map_sourced(ctx, raw, source_field, target, field)
            }
            None => {
                log::trace!("{}: no source field, using fallback", ctx.path());
                fallback(ctx, target, field)
            }
        }
    }

    /// Map a source field value into `field`, softening an unresolvable
    /// abstract type into the fallback when the target field may be omitted.
    fn map_sourced(
        ctx: &MappingContext<'_>,
        raw: &DynamicValue,
        source_field: &FieldDescriptor,
        target: &TypeDescriptor,
        field: &FieldDescriptor,
    ) -> Result<DynamicValue> {
        if raw.is_null() && !field.type_desc.is_optional() {
            return fallback(ctx, target, field);
        }

        match Self::map_value(ctx, raw, &source_field.type_desc, &field.type_desc) {
            Err(e) if e.is_unresolvable() && field.is_omittable() => {
                log::warn!("{}: omitting {}.{}: {}", ctx.path(), target.name, field.name, e);
                fallback(ctx, target, field)
            }
            other => other,
        }
    }
}

fn read<'v>(source: Option<&'v StructValue>, field: &str) -> &'v DynamicValue {
    source.and_then(|s| s.field(field)).unwrap_or(&NULL)
}

fn fallback(
    ctx: &MappingContext<'_>,
    target: &TypeDescriptor,
    field: &FieldDescriptor,
) -> Result<DynamicValue> {
    field
        .fallback()
        .ok_or_else(|| MappingError::MissingRequiredProperty {
            path: ctx.path().to_string(),
            target_type: target.name.clone(),
            field: field.name.clone(),
        })
}

/// Whether `value` is an instance of `desc`. Objects are checked by type name.
fn fits(value: &DynamicValue, desc: &TypeDescriptor) -> bool {
    match &desc.kind {
        TypeKind::Optional(inner) => value.is_null() || fits(value, inner),
        _ if value.is_null() => false,
        TypeKind::Primitive(kind) => value.primitive_kind() == Some(*kind),
        TypeKind::Sequence(seq) => value
            .as_sequence()
            .is_some_and(|items| items.iter().all(|item| fits(item, &seq.element_type))),
        TypeKind::Struct(_) | TypeKind::Singleton | TypeKind::Abstract(_) => value
            .type_name()
            .is_some_and(|name| desc.concrete_for(name).is_some()),
    }
}

fn mismatch(ctx: &MappingContext<'_>, expected: &TypeDescriptor, found: &DynamicValue) -> MappingError {
    MappingError::TypeMismatch {
        path: ctx.path().to_string(),
        expected: expected.describe(),
        found: found.describe(),
    }
}
