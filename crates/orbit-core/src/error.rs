//! Construction-time contract violations.
//!
//! Everything the engine computes after construction is plain arithmetic on
//! validated data, so this is the only error type in the crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("entity at catalog index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate entity id `{id}`")]
    DuplicateId { id: String },

    #[error("entity `{id}` has no layer tag")]
    MissingLayer { id: String },

    #[error("entity `{id}` names layer `{layer}` but no ring with that id is configured")]
    UnknownLayer { id: String, layer: String },

    #[error("entity `{id}` has invalid color `{value}` (expected #RRGGBB)")]
    InvalidColor { id: String, value: String },

    #[error("unknown size class `{0}` (expected large, medium or small)")]
    UnknownSizeClass(String),

    #[error("ring `{id}` has invalid radius {radius} (must be finite and > 0)")]
    InvalidRingRadius { id: String, radius: f32 },

    #[error("ring `{id}` has non-finite angular speed {speed}")]
    InvalidRingSpeed { id: String, speed: f32 },

    #[error("ring id `{0}` is configured more than once")]
    DuplicateRing(String),

    #[error("invalid sphere parameters: {0}")]
    InvalidSphere(&'static str),

    #[error("invalid proximity graph parameters: {0}")]
    InvalidGraph(&'static str),

    #[error("invalid particle parameters: {0}")]
    InvalidParticles(&'static str),
}
