//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the stored canvas layouts, one module array per caller, replaced
//! wholesale on every save — the store never merges or diffs against prior
//! state. Entries are kept in the exact wire shape they were submitted in so
//! a reload returns byte-equivalent data.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

/// One module entry as stored and on the wire.
///
/// Deliberately independent of the canvas crate's record type: the store
/// validates shape only (required string `id`, required numeric position and
/// dimensions) and carries everything else opaquely, including
/// `componentName` and type-specific prop data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub id: String,
    pub props: EntryProps,
    /// Remaining entry fields (`componentName`, ...), preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The required numeric prop block; extra prop keys are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryProps {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shared application state, injected into Axum handlers via the State
/// extractor. Clone is required by Axum — the layout map is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    /// Stored layouts keyed by caller identity.
    pub layouts: Arc<RwLock<HashMap<Uuid, Vec<ModuleEntry>>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
