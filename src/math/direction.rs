use std::ops::{Mul, Neg, Not};

use super::{Point, Vector, TOLERANCE};

/// A unit vector.
///
/// Every constructor normalizes. Normalizing a zero-length input divides by
/// zero and yields the NaN direction, the same value as
/// [`Direction::infinity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    x: f64,
    y: f64,
}

impl Direction {
    /// Normalizes `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        let a = x.hypot(y);
        Self { x: x / a, y: y / a }
    }

    /// The direction at polar angle `angle`.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    /// The direction from `p` towards `q`.
    #[must_use]
    pub fn between(p: &Point, q: &Point) -> Self {
        Self::new(q.x - p.x, q.y - p.y)
    }

    /// The undefined direction, both components NaN.
    #[must_use]
    pub fn infinity() -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
        }
    }

    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Polar angle in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns `true` if the direction has unit length within [`TOLERANCE`].
    #[must_use]
    pub fn is_unit(&self) -> bool {
        (self.x.hypot(self.y) - 1.0).abs() < TOLERANCE
    }

    #[must_use]
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

/// Signed angle from `d1` to `d2` in `(-π, π]`.
#[must_use]
pub fn angle(d1: &Direction, d2: &Direction) -> f64 {
    let cosq = d1.x * d2.x + d1.y * d2.y;
    let sinq = d1.x * d2.y - d1.y * d2.x;
    sinq.atan2(cosq)
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Rotation by +90°.
impl Not for Direction {
    type Output = Direction;

    fn not(self) -> Direction {
        Direction {
            x: -self.y,
            y: self.x,
        }
    }
}

impl Mul<f64> for Direction {
    type Output = Vector;

    fn mul(self, s: f64) -> Vector {
        Vector::from_direction(&self, s)
    }
}

impl Mul<Direction> for f64 {
    type Output = Vector;

    fn mul(self, d: Direction) -> Vector {
        Vector::from_direction(&d, self)
    }
}

impl From<Vector> for Direction {
    fn from(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn constructors_normalize() {
        for d in [
            Direction::new(3.0, 4.0),
            Direction::new(-1e-8, 2e-8),
            Direction::from_angle(2.0),
            Direction::between(&Point::new(1.0, 1.0), &Point::new(-4.0, 7.0)),
        ] {
            assert!(d.is_unit(), "{d:?}");
        }
        let d = Direction::new(3.0, 4.0);
        assert_relative_eq!(d.x(), 0.6);
        assert_relative_eq!(d.y(), 0.8);
    }

    #[test]
    fn zero_length_gives_nan() {
        let p = Point::new(2.0, 2.0);
        assert!(Direction::between(&p, &p).is_infinity());
        assert!(Direction::new(0.0, 0.0).is_infinity());
        assert!(Direction::infinity().is_infinity());
    }

    #[test]
    fn negation_and_rotation() {
        let d = Direction::new(1.0, 2.0);
        assert_eq!(-(-d), d);
        assert_eq!(!!d, -d);
        assert_relative_eq!(angle(&d, &!d), FRAC_PI_2);
    }

    #[test]
    fn signed_angle() {
        let e = Direction::new(1.0, 0.0);
        assert_relative_eq!(angle(&e, &Direction::new(0.0, 1.0)), FRAC_PI_2);
        assert_relative_eq!(angle(&e, &Direction::new(0.0, -1.0)), -FRAC_PI_2);
        assert_relative_eq!(angle(&e, &Direction::new(-1.0, 0.0)), PI);
        assert_relative_eq!(Direction::from_angle(0.5).angle(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn scaling_gives_vector() {
        let d = Direction::new(0.0, 1.0);
        assert_eq!(d * 2.0, Vector::new(0.0, 2.0));
        assert_eq!(2.0 * d, d * 2.0);
    }
}
