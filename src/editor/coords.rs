// src/editor/coords.rs

//! Mapping between resolution-independent normalized points and pixel points
//! of the container the frame is currently shown in.

use crate::region::{NormalizedPoint, PixelPoint, PointId};
use crate::utils::geometry::Vector2D;
use crate::utils::util::clamp_to_bounds;

/// Measured size of the container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check whether the rectangle has positive area.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn contains(&self, pos: Vector2D) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    pub fn to_pixel_position(&self, point: NormalizedPoint) -> Vector2D {
        Vector2D::new(point.x * self.width, point.y * self.height)
    }

    pub fn to_pixel(&self, point: NormalizedPoint, id: PointId) -> PixelPoint {
        PixelPoint::at(id, self.to_pixel_position(point))
    }

    /// Inverse of [`to_pixel_position`](Self::to_pixel_position). A zero-sized
    /// axis maps to 0 instead of dividing by zero.
    pub fn to_normalized(&self, pos: Vector2D) -> NormalizedPoint {
        NormalizedPoint::new(scale_down(pos.x, self.width), scale_down(pos.y, self.height))
    }

    pub fn normalize_all<I>(&self, positions: I) -> Vec<NormalizedPoint>
    where
        I: IntoIterator<Item = Vector2D>,
    {
        positions.into_iter().map(|pos| self.to_normalized(pos)).collect()
    }

    /// Clamps a pointer position onto the container.
    pub fn clamp(&self, pos: Vector2D) -> Vector2D {
        clamp_to_bounds(pos, self.width, self.height, 0.0)
    }

    /// Clamps a pointer position into the container shrunk by `inset` on every edge.
    pub fn clamp_inset(&self, pos: Vector2D, inset: f64) -> Vector2D {
        clamp_to_bounds(pos, self.width, self.height, inset)
    }
}

fn scale_down(value: f64, extent: f64) -> f64 {
    if extent == 0.0 {
        0.0
    } else {
        value / extent
    }
}
