//! Input model: pointer events and the canvas origin offset.
//!
//! The host layer forwards raw pointer events in page coordinates. Nothing in
//! this crate ever sees a DOM event; these two types are the full input
//! surface.

/// A pointer event in page coordinates, as delivered by the host layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// Page-coordinate offset of the canvas's top-left corner.
///
/// Used to convert pointer events into canvas-local coordinates at placement
/// time. The host layer refreshes it whenever the canvas element moves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasOrigin {
    pub left: f64,
    pub top: f64,
}

impl CanvasOrigin {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}
