pub mod arc_2d;
mod direction;
mod matrix;
mod point;
mod vector;

pub use direction::{angle, Direction};
pub use matrix::Matrix;
pub use point::{distance, Point};
pub use vector::{cross, dot, Vector};

/// Global geometric tolerance for floating-point comparisons in helpers and
/// tests. The degeneracy checks of the queries use [`Tolerance`] instead.
pub const TOLERANCE: f64 = 1e-10;

/// Thresholds for the degeneracy checks of the intersection queries.
///
/// The default, [`Tolerance::EXACT`], compares against zero exactly: two lines
/// are parallel only when the cross product of their directions is `0`, and a
/// line touches a circle only when the discriminant is `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Lines are parallel when `|cross(d1, d2)| <= parallel`.
    pub parallel: f64,
    /// A line is tangent to a circle when `|discriminant| <= discriminant`.
    pub discriminant: f64,
}

impl Tolerance {
    pub const EXACT: Self = Self {
        parallel: 0.0,
        discriminant: 0.0,
    };

    /// Same threshold for every check.
    #[must_use]
    pub fn uniform(eps: f64) -> Self {
        Self {
            parallel: eps,
            discriminant: eps,
        }
    }

    #[must_use]
    pub fn is_parallel(&self, cross: f64) -> bool {
        cross.abs() <= self.parallel
    }

    #[must_use]
    pub fn is_tangent(&self, discriminant: f64) -> bool {
        discriminant.abs() <= self.discriminant
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::EXACT
    }
}
