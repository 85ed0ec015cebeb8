// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapping options.
//!
//! Options can be built in code, loaded from YAML (feature
//! `config-loaders`), or overridden from environment variables:
//!
//! - `MORPH_DYNAMIC_TYPE_MAPPING`: enable structural matching ("1"/"true")
//! - `MORPH_IDENTITY_TYPE_MAPPING`: enable identity passthrough ("1"/"true")
//!
//! Both default to disabled.
//!
//! # Example
//!
//! ```yaml
//! dynamic_type_mapping: enabled
//! identity_type_mapping: disabled
//! ```

use std::env;

/// Environment variable names
pub const ENV_DYNAMIC_TYPE_MAPPING: &str = "MORPH_DYNAMIC_TYPE_MAPPING";
pub const ENV_IDENTITY_TYPE_MAPPING: &str = "MORPH_IDENTITY_TYPE_MAPPING";

/// On/off switch for a mapping behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "config-loaders",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Toggle {
    Enabled,
    #[default]
    Disabled,
}

impl Toggle {
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    /// Parse "1"/"true"/"enabled" and "0"/"false"/"disabled".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == "1" || raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("enabled") {
            Some(Self::Enabled)
        } else if raw == "0"
            || raw.eq_ignore_ascii_case("false")
            || raw.eq_ignore_ascii_case("disabled")
        {
            Some(Self::Disabled)
        } else {
            None
        }
    }
}

impl From<bool> for Toggle {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Resolution policy flags. Immutable once a mapper is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config-loaders",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct MappingOptions {
    /// Fall back to structural matching when no type map exists.
    pub dynamic_type_mapping: Toggle,
    /// Pass values through unchanged when source and target types coincide.
    pub identity_type_mapping: Toggle,
}

impl MappingOptions {
    /// Both flags disabled.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn dynamic_type_mapping(mut self, toggle: impl Into<Toggle>) -> Self {
        self.dynamic_type_mapping = toggle.into();
        self
    }

    #[must_use]
    pub fn identity_type_mapping(mut self, toggle: impl Into<Toggle>) -> Self {
        self.identity_type_mapping = toggle.into();
        self
    }

    pub fn dynamic_enabled(&self) -> bool {
        self.dynamic_type_mapping.is_enabled()
    }

    pub fn identity_enabled(&self) -> bool {
        self.identity_type_mapping.is_enabled()
    }

    /// Load options from environment variables over the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment variables over these options. Unset or
    /// unparseable variables leave the current value untouched.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(toggle) = read_toggle(ENV_DYNAMIC_TYPE_MAPPING) {
            self.dynamic_type_mapping = toggle;
        }
        if let Some(toggle) = read_toggle(ENV_IDENTITY_TYPE_MAPPING) {
            self.identity_type_mapping = toggle;
        }
        self
    }

    /// Parse options from a YAML document.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_str(yaml: &str) -> crate::Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            crate::MappingError::invalid_config(format!("mapping options: {}", e))
        })
    }

    /// Load options from a YAML file.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            crate::MappingError::invalid_config(format!("{}: {}", path.display(), e))
        })?;
        log::debug!("loading mapping options from {}", path.display());
        Self::from_yaml_str(&yaml)
    }
}

fn read_toggle(var: &str) -> Option<Toggle> {
    let raw = env::var(var).ok().filter(|s| !s.is_empty())?;
    let toggle = Toggle::parse(&raw);
    if toggle.is_none() {
        log::warn!("ignoring {}={:?}: expected 1/0/true/false", var, raw);
    }
    toggle
}
