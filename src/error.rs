// src/error.rs
use thiserror::Error;

/// Failures of the outer surfaces: persisted regions, settings files and
/// session scripts. The interactive editors themselves never fail.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("point {index} of region `{region}` lies outside the unit square")]
    OutOfRange { region: String, index: usize },

    #[error("line region `{region}` needs 4 boundary points, found {found}")]
    IncompleteLine { region: String, found: usize },

    #[error("line region `{region}` has no crossing direction")]
    MissingDirection { region: String },

    #[error("no marker at index {index}")]
    UnknownPoint { index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
