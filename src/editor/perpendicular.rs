// src/editor/perpendicular.rs

//! Perpendicular geometry of a line region's baseline: the unit normal, the
//! width handle through the baseline's midpoint, and the capture rectangle
//! obtained by pushing the baseline out to both sides.

use crate::utils::geometry::{Segment2D, Vector2D};

/// The four corners of a capture rectangle, in pixel space.
///
/// Corner order is `baseline0 + n*L`, `baseline1 + n*L`, `baseline1 - n*L`,
/// `baseline0 - n*L`, so corners 0-3 and 1-2 straddle the baseline ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryQuad {
    pub corners: [Vector2D; 4],
}

impl BoundaryQuad {
    /// Recovers the baseline as the midpoints of the two edges that cross it.
    pub fn midline(&self) -> Segment2D {
        let [c0, c1, c2, c3] = self.corners;
        Segment2D::new(c0.midpoint(&c3), c1.midpoint(&c2))
    }

    /// Half the length of the edge from corner 0 to corner 3.
    pub fn half_width(&self) -> f64 {
        self.corners[0].distance_to(&self.corners[3]) / 2.0
    }

    /// Segment between the midpoints of the two long edges. Its start is the
    /// direction point, also when the container stretched the rectangle into
    /// a parallelogram.
    pub fn handle(&self) -> Segment2D {
        let [c0, c1, c2, c3] = self.corners;
        Segment2D::new(c0.midpoint(&c1), c3.midpoint(&c2))
    }
}

/// Normal and centre of a baseline. A missing baseline has no centre; a
/// zero-length one has a zero normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerpendicularOffset {
    baseline: Option<Segment2D>,
    unit_normal: Vector2D,
}

impl PerpendicularOffset {
    pub fn new(baseline: Option<Segment2D>) -> Self {
        let unit_normal = baseline
            .map(|segment| segment.direction().perpendicular().normalize())
            .unwrap_or(Vector2D::ZERO);
        Self {
            baseline,
            unit_normal,
        }
    }

    /// Builds from marker positions; anything but exactly two counts as absent.
    pub fn from_points(points: &[Vector2D]) -> Self {
        match points {
            [start, end] => Self::new(Some(Segment2D::new(*start, *end))),
            _ => Self::new(None),
        }
    }

    pub fn baseline(&self) -> Option<Segment2D> {
        self.baseline
    }

    pub fn direction(&self) -> Vector2D {
        self.baseline
            .map(|segment| segment.direction())
            .unwrap_or(Vector2D::ZERO)
    }

    pub fn center(&self) -> Option<Vector2D> {
        self.baseline.map(|segment| segment.midpoint())
    }

    pub fn unit_normal(&self) -> Vector2D {
        self.unit_normal
    }

    /// Handle through the centre, `length` out along the normal each way. The
    /// start sits on the positive-normal side.
    pub fn handle(&self, length: f64) -> Option<Segment2D> {
        let center = self.center()?;
        let reach = self.unit_normal * length;
        Some(Segment2D::new(center + reach, center - reach))
    }

    /// Pushes the baseline out by `length` on both sides.
    pub fn quadrilateral(&self, length: f64) -> Option<BoundaryQuad> {
        let baseline = self.baseline?;
        let reach = self.unit_normal * length;
        Some(BoundaryQuad {
            corners: [
                baseline.start + reach,
                baseline.end + reach,
                baseline.end - reach,
                baseline.start - reach,
            ],
        })
    }

    /// Largest extrusion that keeps every corner inside `[0, width] x [0, height]`,
    /// given baseline ends inside it. Unbounded for a zero normal.
    pub fn max_length_within(&self, width: f64, height: f64) -> f64 {
        let Some(baseline) = self.baseline else {
            return f64::INFINITY;
        };
        let n = self.unit_normal;
        let mut limit = f64::INFINITY;
        for end in [baseline.start, baseline.end] {
            for (pos, extent, reach) in [(end.x, width, n.x), (end.y, height, n.y)] {
                if reach.abs() > f64::EPSILON {
                    let room = pos.min(extent - pos).max(0.0);
                    limit = limit.min(room / reach.abs());
                }
            }
        }
        limit
    }

    /// Signed distance travelled along the normal from `anchor` to `current`.
    pub fn project(&self, anchor: Vector2D, current: Vector2D) -> f64 {
        self.unit_normal.dot(&(current - anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn horizontal() -> PerpendicularOffset {
        PerpendicularOffset::from_points(&[Vector2D::new(100.0, 200.0), Vector2D::new(300.0, 200.0)])
    }

    #[test]
    fn test_normal_of_horizontal_baseline() {
        let calc = horizontal();
        assert_eq!(calc.direction(), Vector2D::new(200.0, 0.0));
        assert_approx_eq!(calc.unit_normal().x, 0.0);
        assert_approx_eq!(calc.unit_normal().y, 1.0);
        assert_eq!(calc.center(), Some(Vector2D::new(200.0, 200.0)));
    }

    #[test]
    fn test_random_baselines_are_perpendicular() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let start = Vector2D::new(rng.random_range(0.0..900.0), rng.random_range(0.0..400.0));
            let end = Vector2D::new(rng.random_range(0.0..900.0), rng.random_range(0.0..400.0));
            if start.distance_to(&end) < 1e-6 {
                continue;
            }
            let calc = PerpendicularOffset::from_points(&[start, end]);
            assert_approx_eq!(calc.unit_normal().length(), 1.0, 1e-9);
            assert_approx_eq!(calc.unit_normal().dot(&calc.direction()), 0.0, 1e-6);
        }
    }

    #[test]
    fn test_degenerate_baseline_yields_zero_normal() {
        let p = Vector2D::new(40.0, 40.0);
        let calc = PerpendicularOffset::from_points(&[p, p]);
        assert_eq!(calc.unit_normal(), Vector2D::ZERO);
        let handle = calc.handle(75.0).unwrap();
        assert_eq!(handle.start, p);
        assert_eq!(handle.end, p);
    }

    #[test]
    fn test_missing_baseline_has_no_center() {
        let calc = PerpendicularOffset::from_points(&[Vector2D::new(1.0, 2.0)]);
        assert_eq!(calc.center(), None);
        assert_eq!(calc.handle(10.0), None);
        assert_eq!(calc.quadrilateral(10.0), None);
    }

    #[test]
    fn test_handle_is_centered() {
        let handle = horizontal().handle(75.0).unwrap();
        assert_eq!(handle.start, Vector2D::new(200.0, 275.0));
        assert_eq!(handle.end, Vector2D::new(200.0, 125.0));
    }

    #[test]
    fn test_extrusion_geometry() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let start = Vector2D::new(rng.random_range(0.0..900.0), rng.random_range(0.0..400.0));
            let end = Vector2D::new(rng.random_range(0.0..900.0), rng.random_range(0.0..400.0));
            let length = rng.random_range(5.0..200.0);
            let calc = PerpendicularOffset::from_points(&[start, end]);
            if calc.unit_normal() == Vector2D::ZERO {
                continue;
            }
            let [c0, c1, c2, c3] = calc.quadrilateral(length).unwrap().corners;
            let baseline_length = start.distance_to(&end);

            assert_approx_eq!(c0.distance_to(&c1), baseline_length, 1e-6);
            assert_approx_eq!(c3.distance_to(&c2), baseline_length, 1e-6);
            // both long edges run parallel to the baseline
            let d = calc.direction();
            let cross = |v: Vector2D| v.x * d.y - v.y * d.x;
            assert_approx_eq!(cross(c1 - c0), 0.0, 1e-6);
            assert_approx_eq!(cross(c2 - c3), 0.0, 1e-6);
            assert_approx_eq!(c0.distance_to(&c3), 2.0 * length, 1e-6);
            assert_approx_eq!(c1.distance_to(&c2), 2.0 * length, 1e-6);
        }
    }

    #[test]
    fn test_midline_recovers_baseline() {
        let calc = horizontal();
        let quad = calc.quadrilateral(42.0).unwrap();
        assert_eq!(quad.midline(), calc.baseline().unwrap());
        assert_approx_eq!(quad.half_width(), 42.0);
    }

    #[test]
    fn test_quad_handle_matches_centered_handle() {
        let calc = PerpendicularOffset::from_points(&[Vector2D::new(300.0, 150.0), Vector2D::new(500.0, 250.0)]);
        let from_quad = calc.quadrilateral(60.0).unwrap().handle();
        let centered = calc.handle(60.0).unwrap();
        assert_approx_eq!(from_quad.start.x, centered.start.x);
        assert_approx_eq!(from_quad.start.y, centered.start.y);
        assert_approx_eq!(from_quad.end.x, centered.end.x);
        assert_approx_eq!(from_quad.end.y, centered.end.y);
    }

    #[test]
    fn test_max_length_keeps_corners_inside() {
        let calc = PerpendicularOffset::from_points(&[Vector2D::new(100.0, 40.0), Vector2D::new(300.0, 90.0)]);
        let limit = calc.max_length_within(900.0, 400.0);
        assert_approx_eq!(limit, 40.0 / calc.unit_normal().y, 1e-9);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            let start = Vector2D::new(rng.random_range(0.0..900.0), rng.random_range(0.0..400.0));
            let end = Vector2D::new(rng.random_range(0.0..900.0), rng.random_range(0.0..400.0));
            let calc = PerpendicularOffset::from_points(&[start, end]);
            let limit = calc.max_length_within(900.0, 400.0);
            if !limit.is_finite() {
                continue;
            }
            for corner in calc.quadrilateral(limit).unwrap().corners {
                assert!(corner.x >= -1e-6 && corner.x <= 900.0 + 1e-6);
                assert!(corner.y >= -1e-6 && corner.y <= 400.0 + 1e-6);
            }
        }
    }

    #[test]
    fn test_degenerate_baseline_is_unbounded() {
        let p = Vector2D::new(0.0, 0.0);
        let calc = PerpendicularOffset::from_points(&[p, p]);
        assert_eq!(calc.max_length_within(900.0, 400.0), f64::INFINITY);
    }

    #[test]
    fn test_projection_along_normal() {
        let calc = horizontal();
        let scalar = calc.project(Vector2D::new(200.0, 275.0), Vector2D::new(260.0, 285.0));
        assert_approx_eq!(scalar, 10.0);
    }
}
