//! Applying a [`Matrix`] to the value types.
use crate::geometry::{Arcseg, Poly, Ray};
use crate::math::{Direction, Matrix, Point, Vector};

/// Values that can be moved by a similarity transform.
///
/// A [`Matrix`] never mirrors, so arcs keep their bulge: only endpoints move.
pub trait Transform {
    #[must_use]
    fn transformed(&self, m: &Matrix) -> Self;
}

impl Transform for Point {
    fn transformed(&self, m: &Matrix) -> Self {
        m.transform_point(self)
    }
}

impl Transform for Vector {
    fn transformed(&self, m: &Matrix) -> Self {
        m.transform_vector(self)
    }
}

/// Renormalized after the linear part is applied.
impl Transform for Direction {
    fn transformed(&self, m: &Matrix) -> Self {
        Direction::from(m.transform_vector(&self.to_vector()))
    }
}

impl Transform for Ray {
    fn transformed(&self, m: &Matrix) -> Self {
        Ray::new(self.origin().transformed(m), self.direction().transformed(m))
    }
}

impl Transform for Arcseg {
    fn transformed(&self, m: &Matrix) -> Self {
        Arcseg::new(self.start().transformed(m), self.end().transformed(m), self.bulge())
    }
}

impl Transform for Poly {
    fn transformed(&self, m: &Matrix) -> Self {
        self.map_points(|p| p.transformed(m))
    }
}
