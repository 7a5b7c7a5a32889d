use thiserror::Error;

/// Structural failures while decoding a topology document.
///
/// Degenerate rings and unsupported geometry types are not errors: the
/// decoder drops them and keeps going.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected a Topology document, found type {0:?}")]
    NotATopology(String),

    #[error("topology is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("topology has no objects")]
    NoObjects,

    #[error("object {0:?} not found in topology")]
    ObjectNotFound(String),

    #[error("arc index {index} out of range (topology has {len} arcs)")]
    ArcOutOfRange { index: i64, len: usize },

    #[error("arc {arc} overflows the quantized coordinate range")]
    CoordinateOverflow { arc: usize },

    #[error("invalid TopoJSON: {0}")]
    Json(#[from] serde_json::Error),
}
