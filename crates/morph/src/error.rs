// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapper errors.
//!
//! Configuration errors surface from [`crate::MapperBuilder::build`]; the
//! rest surface from [`crate::Mapper::map`]. `path` fields locate the failing
//! property inside the source graph (e.g. `Order.lines[2].product`).

use thiserror::Error;

/// Mapper result type.
pub type Result<T> = std::result::Result<T, MappingError>;

/// Mapping and configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("duplicate type map {source_type} -> {target_type}")]
    DuplicateTypeMap {
        source_type: String,
        target_type: String,
    },

    #[error("invalid mapper configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("{path}: cannot resolve {source_type} to a concrete {target_type}")]
    UnresolvableAbstractType {
        path: String,
        source_type: String,
        target_type: String,
    },

    #[error("{path}: {source_type} structurally matches several targets: {}", .candidates.join(", "))]
    AmbiguousDynamicMapping {
        path: String,
        source_type: String,
        candidates: Vec<String>,
    },

    #[error("{path}: {source_type} has type maps to several variants: {}", .candidates.join(", "))]
    AmbiguousTypeMap {
        path: String,
        source_type: String,
        candidates: Vec<String>,
    },

    #[error("{path}: {target_type}.{field} has no source, override or default")]
    MissingRequiredProperty {
        path: String,
        target_type: String,
        field: String,
    },

    #[error("property override reads {source_type}.{field}, which does not exist")]
    MissingOverrideSource { source_type: String, field: String },

    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    #[error("{path}: transform for {field} failed: {message}")]
    Transform {
        path: String,
        field: String,
        message: String,
    },

    #[error("cannot build {type_name} from mapped value: {message}")]
    Conversion { type_name: String, message: String },
}

impl MappingError {
    /// Errors raised while building a mapper rather than while mapping.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateTypeMap { .. } | Self::InvalidConfig { .. }
        )
    }

    /// Errors that an optional or defaulted target field may absorb.
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Self::UnresolvableAbstractType { .. })
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn conversion(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conversion {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
