use std::ops::{Add, Sub};

use super::Vector;

/// A location in the sketch plane.
///
/// There is no empty point. An undefined result (no intersection, degenerate
/// input) is the NaN point returned by [`Point::infinity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The undefined point, both coordinates NaN.
    #[must_use]
    pub fn infinity() -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
        }
    }

    /// Returns `true` if either coordinate is NaN.
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Midpoint of the segment `self`-`other`.
    #[must_use]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(0.5 * self.x + 0.5 * other.x, 0.5 * self.y + 0.5 * other.y)
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p: &Point, q: &Point) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, v: Vector) -> Point {
        Point::new(self.x - v.x, self.y - v.y)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn distance_is_euclidean() {
        let d = distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn infinity_is_nan() {
        let p = Point::infinity();
        assert!(p.x.is_nan() && p.y.is_nan());
        assert!(p.is_infinity());
        assert!(!Point::new(1.0, 2.0).is_infinity());
    }

    #[test]
    fn point_vector_arithmetic() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(4.0, 6.0);
        let v = q - p;
        assert_eq!(v, Vector::new(3.0, 4.0));
        assert_eq!(p + v, q);
        assert_eq!(q - v, p);
    }

    #[test]
    fn nalgebra_conversion() {
        let p = Point::new(1.5, -2.0);
        let n: nalgebra::Point2<f64> = p.into();
        assert_eq!(Point::from(n), p);
    }
}
