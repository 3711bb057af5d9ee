//! Core state engine for the Arbor canvas builder.
//!
//! This crate owns everything that happens between a palette drop and a save
//! click: translating page-level pointer events into canvas-local placements,
//! tracking the ordered set of placed modules, and running the resize gesture
//! state machine. It performs no I/O; the host layer wires real input events
//! in and the `client` crate carries snapshots to the backend store.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::CanvasEngine`] facade and event routing |
//! | [`module`] | Module records, props, and the ordered in-memory store |
//! | [`registry`] | Component-name to renderable-implementation lookup |
//! | [`components`] | Built-in module components (image, text) |
//! | [`place`] | Drop-position arithmetic and id generation |
//! | [`resize`] | The resize gesture state machine |
//! | [`input`] | Pointer event and canvas origin types |
//! | [`consts`] | Shared numeric constants (default sizes, clamps) |

pub mod components;
pub mod consts;
pub mod engine;
pub mod input;
pub mod module;
pub mod place;
pub mod registry;
pub mod resize;
