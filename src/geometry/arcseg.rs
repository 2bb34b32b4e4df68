use std::ops::Neg;

use crate::math::arc_2d::{self, ArcCircle};
use crate::math::{distance, Direction, Point};

use super::Ray;

/// An oriented arc or straight segment from `start` to `end` with bulge `g`.
///
/// `g = tan(sweep / 4)`:
/// - `0` = straight segment
/// - `> 0` = counter-clockwise arc
/// - `< 0` = clockwise arc
/// - `|g| = 1` = semicircle
///
/// Center and radius are not stored; they are derived from the chord and the
/// bulge on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arcseg {
    start: Point,
    end: Point,
    bulge: f64,
}

impl Arcseg {
    /// Creates a new arc segment with the given bulge.
    #[must_use]
    pub fn new(start: Point, end: Point, bulge: f64) -> Self {
        Self { start, end, bulge }
    }

    /// Creates a straight segment (bulge = 0).
    #[must_use]
    pub fn line(start: Point, end: Point) -> Self {
        Self::new(start, end, 0.0)
    }

    /// Creates the arc from `start` to `end` passing through `mid`.
    #[must_use]
    pub fn through(start: Point, end: Point, mid: &Point) -> Self {
        Self::new(start, end, arc_2d::bulge_from_point(&start, &end, mid))
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    #[must_use]
    pub fn bulge(&self) -> f64 {
        self.bulge
    }

    #[must_use]
    pub fn is_line(&self) -> bool {
        arc_2d::is_straight(self.bulge)
    }

    /// Point and tangent at parameter `s` in `[0, 1]`, returned as a ray.
    #[must_use]
    pub fn at(&self, s: f64) -> Ray {
        let (point, tangent) = arc_2d::parameterize(&self.start, &self.end, self.bulge, s);
        Ray::new(point, tangent)
    }

    /// Length along the curve.
    #[must_use]
    pub fn length(&self) -> f64 {
        arc_2d::arc_length(&self.start, &self.end, self.bulge)
    }

    /// Center of the supporting circle. NaN for a straight segment.
    #[must_use]
    pub fn center(&self) -> Point {
        arc_2d::center_of(&self.start, &self.end, self.bulge)
    }

    /// Radius of the supporting circle, signed like the bulge.
    /// NaN for a straight segment.
    #[must_use]
    pub fn radius(&self) -> f64 {
        if self.is_line() {
            return f64::NAN;
        }
        let t = 0.5 * distance(&self.start, &self.end);
        arc_2d::signed_radius(t, self.bulge)
    }

    /// `2·atan(g)`, half of [`Arcseg::sweep`].
    ///
    /// This is the angle between the chord and the tangent at either end, and
    /// it is what hosts read as the arc's `angle` field.
    #[must_use]
    pub fn angle(&self) -> f64 {
        2.0 * self.bulge.atan()
    }

    /// Included angle at the center, `4·atan(g)`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        arc_2d::sweep(self.bulge)
    }

    /// Supporting circle and endpoint angles.
    #[must_use]
    pub fn circle(&self) -> ArcCircle {
        arc_2d::circle_of(&self.start, &self.end, self.bulge)
    }

    /// Unit direction of the chord.
    #[must_use]
    pub fn chord_direction(&self) -> Direction {
        Direction::between(&self.start, &self.end)
    }
}

/// The same curve traversed backwards.
impl Neg for Arcseg {
    type Output = Arcseg;

    fn neg(self) -> Arcseg {
        Arcseg::new(self.end, self.start, -self.bulge)
    }
}
