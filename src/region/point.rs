// src/region/point.rs
use crate::utils::geometry::Vector2D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position expressed as a fraction of the container's width and height.
///
/// This is the only point shape that is ever persisted. It survives container
/// resizes unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    /// Creates a point, clamping both components into `[0, 1]`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    pub fn is_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Correlation key of an on-screen marker, used to find drag and delete targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub(crate) u64);

impl PointId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An identified marker in container pixel space. Editing-only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(id: PointId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    pub fn at(id: PointId, pos: Vector2D) -> Self {
        Self::new(id, pos.x, pos.y)
    }

    pub fn position(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }
}
