//! Resize gesture state machine: Idle → Active → Idle.
//!
//! DESIGN
//! ======
//! The active session carries the anchor pointer position and the target's
//! original dimensions, and every pointer-move recomputes the new dimensions
//! from that fixed pair rather than accumulating deltas. The result is
//! independent of how many intermediate move events fire (event coalescing
//! safe) and immune to accumulated floating error within a session.
//! Dimensions clamp at zero on underflow; a resize is never rejected
//! mid-flight.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::consts::MIN_MODULE_DIMENSION;
use crate::input::PointerEvent;
use crate::module::{ModuleId, ModuleStore};

#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    /// At most one resize session may be active at a time.
    #[error("a resize session is already active")]
    SessionActive,
    /// The gesture began on an id that is not in the store.
    #[error("resize target not found: {0}")]
    TargetNotFound(ModuleId),
}

/// Context for the active resize gesture. While a session exists it holds the
/// exclusive right to mutate its target's dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    /// Id of the module being resized.
    pub target: ModuleId,
    /// Page-x of the pointer when the gesture began.
    pub anchor_x: f64,
    /// Page-y of the pointer when the gesture began.
    pub anchor_y: f64,
    /// Target width at the start of the gesture.
    pub original_width: f64,
    /// Target height at the start of the gesture.
    pub original_height: f64,
}

/// Short-lived interaction controller owning at most one [`ResizeSession`].
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active session's target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&ModuleId> {
        self.session.as_ref().map(|session| &session.target)
    }

    /// Begin a resize gesture, capturing the anchor pointer position and the
    /// target's current dimensions.
    ///
    /// # Errors
    ///
    /// Returns `SessionActive` if a session is already running, or
    /// `TargetNotFound` if `target` is not in the store.
    pub fn begin(
        &mut self,
        store: &ModuleStore,
        pointer: PointerEvent,
        target: &ModuleId,
    ) -> Result<(), ResizeError> {
        if self.session.is_some() {
            return Err(ResizeError::SessionActive);
        }
        let record = store
            .find(target)
            .ok_or_else(|| ResizeError::TargetNotFound(target.clone()))?;

        self.session = Some(ResizeSession {
            target: target.clone(),
            anchor_x: pointer.page_x,
            anchor_y: pointer.page_y,
            original_width: record.props.width,
            original_height: record.props.height,
        });
        Ok(())
    }

    /// Recompute the target's dimensions from the session anchor:
    /// `max(0, original + (pointer - anchor))` on each axis. No-op while
    /// idle. Returns whether a record was mutated.
    pub fn update(&mut self, store: &mut ModuleStore, pointer: PointerEvent) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        let Some(record) = store.find_mut(&session.target) else {
            return false;
        };

        record.props.width =
            (session.original_width + (pointer.page_x - session.anchor_x)).max(MIN_MODULE_DIMENSION);
        record.props.height =
            (session.original_height + (pointer.page_y - session.anchor_y)).max(MIN_MODULE_DIMENSION);
        true
    }

    /// End the gesture and release the session. Safe to call when already
    /// idle; once ended, no later pointer event can mutate the old target.
    pub fn end(&mut self) {
        self.session = None;
    }
}
