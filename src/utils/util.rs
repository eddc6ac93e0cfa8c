//! # Utility Module
//!
//! Clamping helpers shared by the editors. Pointer positions coming from the host
//! may lie outside the container (the pointer keeps moving after leaving the
//! frame during a drag), so every drag handler clamps before it commits.

use crate::utils::geometry::Vector2D;

// `f64::clamp` panics when the bounds cross, which a container narrower
// than twice the inset produces.
fn clamp_axis(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

/// Clamps a pixel position into `[inset, width - inset] x [inset, height - inset]`.
pub fn clamp_to_bounds(pos: Vector2D, width: f64, height: f64, inset: f64) -> Vector2D {
    Vector2D::new(
        clamp_axis(pos.x, inset, width - inset),
        clamp_axis(pos.y, inset, height - inset),
    )
}
