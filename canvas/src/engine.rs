//! Top-level engine facade: owns the registry, store, and resize controller,
//! and routes discrete input events between them.
//!
//! All mutation happens in reaction to one event at a time (drop,
//! pointer-move, pointer-up, data edit); there is no parallel execution in
//! the core. The engine takes the registry by value at construction, so the
//! full component manifest is a hard precondition of the first placement, and
//! it enforces interaction exclusivity: while a resize session is active,
//! pointer-moves belong to that session and moves of the resized module are
//! rejected.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde_json::Value;

use crate::input::{CanvasOrigin, PointerEvent};
use crate::module::{ModuleDescriptor, ModuleId, ModuleRecord, ModuleStore};
use crate::place::{self, PlaceError};
use crate::registry::ComponentRegistry;
use crate::resize::{ResizeController, ResizeError};

pub struct CanvasEngine {
    registry: ComponentRegistry,
    store: ModuleStore,
    resize: ResizeController,
    origin: CanvasOrigin,
}

impl CanvasEngine {
    /// Create an engine over a fully populated registry.
    #[must_use]
    pub fn new(registry: ComponentRegistry, origin: CanvasOrigin) -> Self {
        Self { registry, store: ModuleStore::new(), resize: ResizeController::new(), origin }
    }

    /// Update the canvas origin, e.g. after the host element moved.
    pub fn set_origin(&mut self, origin: CanvasOrigin) {
        self.origin = origin;
    }

    // --- Placement ---

    /// Handle a palette drop at the given pointer position.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` for an unregistered component name; the
    /// store is left unchanged.
    pub fn drop_module(
        &mut self,
        descriptor: &ModuleDescriptor,
        pointer: PointerEvent,
    ) -> Result<ModuleId, PlaceError> {
        place::place(&mut self.store, &self.registry, descriptor, self.origin, pointer)
    }

    // --- Resize gesture ---

    /// Begin a resize gesture on `target`.
    ///
    /// # Errors
    ///
    /// Returns `SessionActive` if a session is already running, or
    /// `TargetNotFound` if `target` is not in the store.
    pub fn begin_resize(&mut self, target: &ModuleId, pointer: PointerEvent) -> Result<(), ResizeError> {
        self.resize.begin(&self.store, pointer, target)
    }

    /// Route a pointer-move. Consumed by the resize session when one is
    /// active; otherwise a no-op. Returns whether a record was mutated.
    pub fn on_pointer_move(&mut self, pointer: PointerEvent) -> bool {
        self.resize.update(&mut self.store, pointer)
    }

    /// Pointer released: end any active resize session. Idempotent.
    pub fn end_resize(&mut self) {
        self.resize.end();
    }

    /// Whether a resize session is currently active.
    #[must_use]
    pub fn resize_active(&self) -> bool {
        self.resize.is_active()
    }

    // --- Record mutation ---

    /// Reposition a module. Rejected while a resize session owns the record
    /// (interaction exclusivity) or when the id is unknown.
    pub fn move_module(&mut self, id: &ModuleId, x: f64, y: f64) -> bool {
        if self.resize.target() == Some(id) {
            return false;
        }
        let Some(record) = self.store.find_mut(id) else {
            return false;
        };
        record.props.x = x;
        record.props.y = y;
        true
    }

    /// Write a module's `data` prop, as a type-specific editor does.
    /// Returns false when the id is unknown.
    pub fn update_module_data(&mut self, id: &ModuleId, value: Value) -> bool {
        let Some(record) = self.store.find_mut(id) else {
            return false;
        };
        record.props.data.insert("data".to_owned(), value);
        true
    }

    /// Hydrate the store from a backend snapshot.
    pub fn load_snapshot(&mut self, records: Vec<ModuleRecord>) {
        self.store.load_snapshot(records);
    }

    // --- Queries ---

    /// All placed modules in z-order; what the render layer iterates and the
    /// persistence gateway serializes.
    #[must_use]
    pub fn modules(&self) -> &[ModuleRecord] {
        self.store.all()
    }

    /// Look up a module by id.
    #[must_use]
    pub fn module(&self, id: &ModuleId) -> Option<&ModuleRecord> {
        self.store.find(id)
    }

    /// Render one module via its registered component. `None` when either
    /// the id or the component is unknown.
    #[must_use]
    pub fn render_module(&self, id: &ModuleId) -> Option<String> {
        let record = self.store.find(id)?;
        let component = self.registry.resolve(&record.component_name)?;
        Some(component.render(record))
    }

    /// The component registry (read-only).
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }
}
