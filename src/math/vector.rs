use std::ops::{Add, Div, Mul, Neg, Not, Sub};

use super::{Direction, Point};

/// A displacement in the sketch plane. Not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Creates a new vector.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The displacement from `p` to `q`.
    #[must_use]
    pub fn between(p: &Point, q: &Point) -> Self {
        Self::new(q.x - p.x, q.y - p.y)
    }

    /// `t` units along `d`.
    #[must_use]
    pub fn from_direction(d: &Direction, t: f64) -> Self {
        Self::new(d.x() * t, d.y() * t)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        dot(self, other)
    }

    #[must_use]
    pub fn cross(&self, other: &Vector) -> f64 {
        cross(self, other)
    }
}

/// Dot product.
#[must_use]
pub fn dot(u: &Vector, v: &Vector) -> f64 {
    u.x * v.x + u.y * v.y
}

/// 2D cross product (determinant of `[u v]`).
///
/// Positive when `v` is a counter-clockwise turn from `u`.
#[must_use]
pub fn cross(u: &Vector, v: &Vector) -> f64 {
    u.x * v.y - u.y * v.x
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// Rotation by +90°.
impl Not for Vector {
    type Output = Vector;

    fn not(self) -> Vector {
        Vector::new(-self.y, self.x)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, v: Vector) -> Vector {
        Vector::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, v: Vector) -> Vector {
        Vector::new(self.x - v.x, self.y - v.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, s: f64) -> Vector {
        Vector::new(s * self.x, s * self.y)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        Vector::new(self * v.x, self * v.y)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, s: f64) -> Vector {
        Vector::new(self.x / s, self.y / s)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for nalgebra::Vector2<f64> {
    fn from(v: Vector) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_is_antisymmetric() {
        let u = Vector::new(1.5, -2.0);
        let v = Vector::new(0.25, 3.0);
        assert_eq!(cross(&u, &v), -cross(&v, &u));
        assert!(cross(&Vector::new(1.0, 0.0), &Vector::new(0.0, 1.0)) > 0.0);
    }

    #[test]
    fn dot_is_symmetric_and_bilinear() {
        let u = Vector::new(1.0, 2.0);
        let v = Vector::new(-3.0, 0.5);
        let w = Vector::new(4.0, -1.0);
        assert_eq!(dot(&u, &v), dot(&v, &u));
        assert_relative_eq!(dot(&(u + w), &v), dot(&u, &v) + dot(&w, &v));
        assert_relative_eq!(dot(&(2.5 * u), &v), 2.5 * dot(&u, &v));
    }

    #[test]
    fn scalar_ops() {
        let v = Vector::new(2.0, -4.0);
        assert_eq!(v * 0.5, Vector::new(1.0, -2.0));
        assert_eq!(0.5 * v, v / 2.0);
        assert_eq!(-v, Vector::new(-2.0, 4.0));
        assert_relative_eq!(Vector::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn left_rotation() {
        let v = Vector::new(1.0, 2.0);
        assert_eq!(!v, Vector::new(-2.0, 1.0));
        assert_eq!(!!v, -v);
        assert_relative_eq!(dot(&v, &!v), 0.0);
    }

    #[test]
    fn from_direction_scales() {
        let d = Direction::new(0.0, 2.0);
        assert_eq!(Vector::from_direction(&d, 3.0), Vector::new(0.0, 3.0));
        assert_eq!(Vector::between(&Point::new(1.0, 1.0), &Point::new(2.0, 3.0)), Vector::new(1.0, 2.0));
    }
}
