use std::ops::Mul;

use super::{Point, Vector};

/// A similarity transform of the plane: uniform scale, rotation, translation.
///
/// Stored as a homogeneous 3x3 matrix. The determinant of the linear part is
/// `s²`, so these transforms never mirror and arc orientation is preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    m: nalgebra::Matrix3<f64>,
}

impl Matrix {
    /// Scale by `s`, rotate counter-clockwise by `r` radians, then translate
    /// by `(tx, ty)`.
    #[must_use]
    pub fn new(s: f64, r: f64, tx: f64, ty: f64) -> Self {
        let (sn, cs) = r.sin_cos();
        #[rustfmt::skip]
        let m = nalgebra::Matrix3::new(
            s * cs, -s * sn, tx,
            s * sn,  s * cs, ty,
            0.0,     0.0,    1.0,
        );
        Self { m }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self {
            m: nalgebra::Matrix3::identity(),
        }
    }

    /// Pure translation.
    #[must_use]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, tx, ty)
    }

    #[must_use]
    pub fn transform_point(&self, p: &Point) -> Point {
        let h = self.m * nalgebra::Vector3::new(p.x, p.y, 1.0);
        Point::new(h.x, h.y)
    }

    /// Applies the linear part only.
    #[must_use]
    pub fn transform_vector(&self, v: &Vector) -> Vector {
        let h = self.m * nalgebra::Vector3::new(v.x, v.y, 0.0);
        Vector::new(h.x, h.y)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix { m: self.m * rhs.m }
    }
}
