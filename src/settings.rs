// src/settings.rs
use crate::error::RegionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables of the interactive editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Half-width of a freshly extruded capture rectangle, in pixels.
    pub default_offset: f64,
    /// Offset drags that would leave the half-width at or below this are ignored.
    pub min_offset: f64,
    /// Offset drags clamp the pointer this many pixels inside the container.
    pub drag_inset: f64,
    /// Largest corner mismatch, in pixels, for which a stored quadrilateral is
    /// accepted as one of ours when it is reopened.
    pub reconstruction_tolerance: f64,
    /// Hit radius of point markers, in pixels.
    pub marker_radius: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_offset: 75.0,
            min_offset: 5.0,
            drag_inset: 10.0,
            reconstruction_tolerance: 1.0,
            marker_radius: 10.0,
        }
    }
}

impl EditorSettings {
    pub fn from_json(json: &str) -> Result<Self, RegionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegionError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
