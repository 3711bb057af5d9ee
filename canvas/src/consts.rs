//! Shared numeric constants for the canvas crate.

/// Width assigned to a dropped module when its descriptor does not specify one.
pub const DEFAULT_MODULE_WIDTH: f64 = 100.0;

/// Height assigned to a dropped module when its descriptor does not specify one.
pub const DEFAULT_MODULE_HEIGHT: f64 = 100.0;

/// Lower bound for module dimensions; resize clamps here instead of going negative.
pub const MIN_MODULE_DIMENSION: f64 = 0.0;

/// Exclusive upper bound for the random suffix in generated module ids.
pub const ID_SUFFIX_RANGE: u32 = 10_000;
