use crate::math::{Direction, Point, Vector};

/// An oriented infinite line defined by an origin point and a unit direction.
///
/// The parametric form is `P(t) = origin + t * direction` for every real `t`.
/// Despite the name, negative `t` is part of the line: distances along a
/// `Ray` are signed and intersections are never clipped to `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Direction,
}

impl Ray {
    /// Creates a new ray from an origin and direction.
    #[must_use]
    pub fn new(origin: Point, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray along `v`. A zero `v` gives the NaN direction.
    #[must_use]
    pub fn from_vector(origin: Point, v: Vector) -> Self {
        Self::new(origin, Direction::from(v))
    }

    /// Returns the origin point of the ray.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the unit direction of the ray.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Point at signed parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}
