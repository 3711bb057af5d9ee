//! Module model: placed canvas modules, their props, and the ordered store.
//!
//! This module defines the record type that describes what is on the canvas
//! (`ModuleRecord`), the typed prop block every module carries
//! (`ModuleProps`), the palette-side descriptor a drop starts from
//! (`ModuleDescriptor`), and the runtime store that owns all live records
//! (`ModuleStore`).
//!
//! Data flows into this layer from the placement service (new records), the
//! resize controller (dimension writes), and the network (snapshot reloads).
//! The render layer reads `ModuleStore::all` in insertion order, which is the
//! implicit z-order: later placements draw on top.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{DEFAULT_MODULE_HEIGHT, DEFAULT_MODULE_WIDTH};

/// Opaque unique identifier for a placed module.
///
/// Generated at placement time (`module-{millis}-{suffix}`), stable for the
/// record's lifetime, and the sole lookup key into the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub String);

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

/// Position, dimensions, and type-specific data for one module.
///
/// `x`/`y` are canvas-local coordinates written by placement (and drag).
/// `width`/`height` are written by the resize controller and are never
/// negative. Everything else lives in the flattened `data` bag (image source,
/// text content, etc.) and is owned by the module's editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleProps {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Open-ended type-specific data, flattened on the wire.
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl ModuleProps {
    /// Props at a position with the default 100×100 dimensions.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: DEFAULT_MODULE_WIDTH,
            height: DEFAULT_MODULE_HEIGHT,
            data: Map::new(),
        }
    }

    /// The props a renderable component receives: everything except the
    /// placement coordinates `x` and `y`.
    #[must_use]
    pub fn component_props(&self) -> Map<String, Value> {
        let mut props = self.data.clone();
        props.insert("width".to_owned(), self.width.into());
        props.insert("height".to_owned(), self.height.into());
        props
    }
}

/// A placed module as stored and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    /// Unique identifier, generated at placement.
    pub id: ModuleId,
    /// Which renderable implementation draws this module. Immutable after
    /// creation; must resolve in the registry at placement time.
    pub component_name: String,
    /// Position, dimensions, and type-specific data.
    pub props: ModuleProps,
}

/// What a palette drag carries before placement: the component name plus any
/// pre-set dimensions and data. Position is never taken from the descriptor;
/// it always comes from the drop pointer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    pub component_name: String,
    #[serde(default)]
    pub props: DescriptorProps,
}

impl ModuleDescriptor {
    #[must_use]
    pub fn new(component_name: impl Into<String>) -> Self {
        Self { component_name: component_name.into(), props: DescriptorProps::default() }
    }

    /// Add one type-specific data entry.
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.data.insert(key.into(), value.into());
        self
    }
}

/// Descriptor-side props: dimensions are optional (defaulted at placement),
/// everything else is carried into the record's data bag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptorProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

/// Ordered in-memory store of placed modules; the sole source of truth for
/// what is on the canvas.
pub struct ModuleStore {
    records: Vec<ModuleRecord>,
}

impl ModuleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Append a record. If a record with the same `id` already exists it is
    /// replaced in place, preserving its z-position, so ids stay unique.
    pub fn append(&mut self, record: ModuleRecord) {
        match self.records.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Return a reference to a record by id.
    #[must_use]
    pub fn find(&self, id: &ModuleId) -> Option<&ModuleRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Return a mutable reference to a record by id.
    pub fn find_mut(&mut self, id: &ModuleId) -> Option<&mut ModuleRecord> {
        self.records.iter_mut().find(|record| &record.id == id)
    }

    /// All records in insertion order (the implicit z-order).
    #[must_use]
    pub fn all(&self) -> &[ModuleRecord] {
        &self.records
    }

    /// Replace all records with a full snapshot, e.g. a reload from the
    /// backend store. Later duplicates win, keeping ids unique.
    pub fn load_snapshot(&mut self, records: Vec<ModuleRecord>) {
        self.records.clear();
        for record in records {
            self.append(record);
        }
    }

    /// Number of records currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store contains no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ModuleStore {
    fn default() -> Self {
        Self::new()
    }
}
