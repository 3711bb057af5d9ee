//! Component registry: module type name to renderable implementation.
//!
//! DESIGN
//! ======
//! The registry is a statically declared manifest, populated in full before
//! the engine is constructed and immutable afterwards. Registry readiness is
//! therefore an explicit precondition of every placement, not a timing
//! assumption: there is no window in which a drop can race an asynchronous
//! component discovery. A lookup miss is a non-fatal `None`.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::sync::Arc;

use crate::components;
use crate::module::ModuleRecord;

/// A renderable module implementation.
///
/// Implementations are stateless; everything they draw comes from the
/// record's props, with the placement coordinates already stripped
/// (`ModuleProps::component_props`).
pub trait Renderable: Send + Sync {
    /// The type name this component registers under.
    fn component_name(&self) -> &'static str;

    /// Produce the markup fragment for one placed module.
    fn render(&self, record: &ModuleRecord) -> String;
}

/// Lookup table from module type name to its renderable implementation.
pub struct ComponentRegistry {
    entries: HashMap<String, Arc<dyn Renderable>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Registry pre-populated with the built-in module manifest.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for component in components::builtin_manifest() {
            registry.register(component.component_name(), component);
        }
        registry
    }

    /// Add an entry. Registration happens during initialization only; once
    /// the registry is handed to an engine no further mutation is possible.
    pub fn register(&mut self, name: impl Into<String>, component: Arc<dyn Renderable>) {
        self.entries.insert(name.into(), component);
    }

    /// Resolve a type name to its implementation. `None` on a miss.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn Renderable>> {
        self.entries.get(name)
    }

    /// Whether a type name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered component types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no components are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
