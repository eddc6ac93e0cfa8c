// src/utils/geometry.rs
use std::ops::{Add, Mul, Neg, Sub};

/// A position or direction in container pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(&self, other: &Vector2D) -> f64 {
        (*self - *other).length()
    }

    pub fn midpoint(&self, other: &Vector2D) -> Vector2D {
        Vector2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Rotates `(dx, dy)` into `(-dy, dx)`.
    pub fn perpendicular(&self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    /// Unit vector in the same direction. A zero-length vector stays zero.
    pub fn normalize(&self) -> Vector2D {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Vector2D::ZERO;
        }
        Vector2D::new(self.x / length, self.y / length)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

/// A directed segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2D {
    pub start: Vector2D,
    pub end: Vector2D,
}

impl Segment2D {
    pub fn new(start: Vector2D, end: Vector2D) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vector2D {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Vector2D {
        self.start.midpoint(&self.end)
    }
}
