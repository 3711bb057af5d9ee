//! Module placement: drop-position arithmetic and id generation.
//!
//! A drop lands at the pointer's page position translated into canvas-local
//! coordinates. Placement resolves the component first and mutates nothing on
//! a miss; on a hit it generates a fresh id, fills in default dimensions, and
//! appends to the store. Store mutation only — no I/O.

#[cfg(test)]
#[path = "place_test.rs"]
mod place_test;

use rand::Rng;

use crate::consts::{DEFAULT_MODULE_HEIGHT, DEFAULT_MODULE_WIDTH, ID_SUFFIX_RANGE};
use crate::input::{CanvasOrigin, PointerEvent};
use crate::module::{ModuleDescriptor, ModuleId, ModuleProps, ModuleRecord, ModuleStore};
use crate::registry::ComponentRegistry;

#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// The descriptor referenced a module type absent from the registry.
    /// Recovered locally: the placement is aborted and the store untouched.
    #[error("component not found in registry: {0}")]
    ComponentNotFound(String),
}

/// Place a dropped module onto the canvas.
///
/// Computes `x = page_x - origin.left`, `y = page_y - origin.top`, applies
/// 100×100 default dimensions when the descriptor omits them, and appends
/// the record to the store.
///
/// # Errors
///
/// Returns `ComponentNotFound` if the descriptor's component name does not
/// resolve in the registry; the store is left unchanged.
pub fn place(
    store: &mut ModuleStore,
    registry: &ComponentRegistry,
    descriptor: &ModuleDescriptor,
    origin: CanvasOrigin,
    pointer: PointerEvent,
) -> Result<ModuleId, PlaceError> {
    if !registry.contains(&descriptor.component_name) {
        return Err(PlaceError::ComponentNotFound(descriptor.component_name.clone()));
    }

    let id = generate_module_id(store);
    let record = ModuleRecord {
        id: id.clone(),
        component_name: descriptor.component_name.clone(),
        props: ModuleProps {
            x: pointer.page_x - origin.left,
            y: pointer.page_y - origin.top,
            width: descriptor.props.width.unwrap_or(DEFAULT_MODULE_WIDTH),
            height: descriptor.props.height.unwrap_or(DEFAULT_MODULE_HEIGHT),
            data: descriptor.props.data.clone(),
        },
    };
    store.append(record);
    Ok(id)
}

/// Generate a fresh `module-{millis}-{suffix}` id, re-rolled until it does
/// not collide with a live store id. Collisions require two drops in the
/// same millisecond drawing the same suffix, so the loop almost never spins.
fn generate_module_id(store: &ModuleStore) -> ModuleId {
    let mut rng = rand::rng();
    loop {
        let id = ModuleId(format!("module-{}-{}", now_ms(), rng.random_range(0..ID_SUFFIX_RANGE)));
        if store.find(&id).is_none() {
            return id;
        }
    }
}

fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis())
}
