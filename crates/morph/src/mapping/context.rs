// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-call mapping context.

use crate::config::MappingOptions;
use crate::mapping::TypeMapRegistry;

/// Read-only state for one `map` call, plus the position inside the source
/// graph used in diagnostics.
///
/// A child context is derived for each field or element visited; nothing is
/// shared mutably between calls, so a mapper can serve many threads.
#[derive(Debug, Clone)]
pub struct MappingContext<'a> {
    registry: &'a TypeMapRegistry,
    options: &'a MappingOptions,
    path: String,
    depth: usize,
}

impl<'a> MappingContext<'a> {
    /// Root context for mapping a value of `root_type`.
    pub fn new(registry: &'a TypeMapRegistry, options: &'a MappingOptions, root_type: &str) -> Self {
        Self {
            registry,
            options,
            path: root_type.to_string(),
            depth: 0,
        }
    }

    pub fn registry(&self) -> &'a TypeMapRegistry {
        self.registry
    }

    pub fn options(&self) -> &'a MappingOptions {
        self.options
    }

    /// Dotted location, e.g. `Order.lines[1].product`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Nesting depth below the root value.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True for the value passed to `map` itself.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Context for a struct field.
    pub fn field(&self, name: &str) -> Self {
        self.child(format!("{}.{}", self.path, name))
    }

    /// Context for a sequence element.
    pub fn element(&self, index: usize) -> Self {
        self.child(format!("{}[{}]", self.path, index))
    }

    fn child(&self, path: String) -> Self {
        Self {
            registry: self.registry,
            options: self.options,
            path,
            depth: self.depth + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_depth() {
        let registry = TypeMapRegistry::new();
        let options = MappingOptions::default();
        let root = MappingContext::new(&registry, &options, "Order");
        assert!(root.is_root());
        assert_eq!(root.path(), "Order");

        let line = root.field("lines").element(1).field("product");
        assert_eq!(line.path(), "Order.lines[1].product");
        assert_eq!(line.depth(), 3);
        assert!(!line.is_root());
        assert_eq!(root.path(), "Order");
    }
}
