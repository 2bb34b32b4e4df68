//! Bulge arc math.
//!
//! An arc segment is the triple `(p, q, g)`: start point, end point and
//! bulge `g = tan(sweep / 4)`.
//! - `g = 0`: straight segment
//! - `g > 0`: counter-clockwise arc
//! - `g < 0`: clockwise arc
//! - `|g| = 1`: semicircle
use std::f64::consts::FRAC_PI_2;

use super::{distance, Direction, Point, Vector};

/// The supporting circle of a bulge arc and the angles of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCircle {
    pub center: Point,
    /// Always non-negative.
    pub radius: f64,
    /// Polar angle of the start point about `center`, in `(-π, π]`.
    pub start_angle: f64,
    /// Polar angle of the end point about `center`, in `(-π, π]`.
    pub end_angle: f64,
}

/// Returns `true` for a zero bulge.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_straight(g: f64) -> bool {
    g == 0.0
}

/// Included angle of the arc, `4·atan(g)`. Signed like `g`.
#[must_use]
pub fn sweep(g: f64) -> f64 {
    4.0 * g.atan()
}

/// Signed distance from the chord midpoint to the center, measured along the
/// left normal of the chord.
#[must_use]
pub fn center_offset(half_chord: f64, g: f64) -> f64 {
    half_chord * (1.0 - g * g) / (2.0 * g)
}

/// Signed radius, positive for counter-clockwise arcs.
#[must_use]
pub fn signed_radius(half_chord: f64, g: f64) -> f64 {
    half_chord * (1.0 + g * g) / (2.0 * g)
}

/// Center of the circle through `p` and `q` for bulge `g`.
///
/// Undefined (NaN) for a straight segment.
#[must_use]
pub fn center_of(p: &Point, q: &Point, g: f64) -> Point {
    if is_straight(g) {
        return Point::infinity();
    }
    let m = p.midpoint(q);
    let normal = !Direction::between(p, q);
    let d = center_offset(distance(p, &m), g);
    m + normal * d
}

/// Supporting circle and endpoint angles of the arc `(p, q, g)`.
///
/// A straight segment has no circle: center NaN, radius infinite.
#[must_use]
pub fn circle_of(p: &Point, q: &Point, g: f64) -> ArcCircle {
    if is_straight(g) {
        return ArcCircle {
            center: Point::infinity(),
            radius: f64::INFINITY,
            start_angle: f64::NAN,
            end_angle: f64::NAN,
        };
    }
    let center = center_of(p, q, g);
    let radius = signed_radius(0.5 * distance(p, q), g).abs();
    ArcCircle {
        center,
        radius,
        start_angle: (p.y - center.y).atan2(p.x - center.x),
        end_angle: (q.y - center.y).atan2(q.x - center.x),
    }
}

/// Bulge of the arc from `p` to `q` passing through `m`.
///
/// Colinear points give a straight segment (`0`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn bulge_from_point(p: &Point, q: &Point, m: &Point) -> f64 {
    let u = *p - *m;
    let v = *q - *m;
    let c = u.cross(&v);
    if c == 0.0 {
        return 0.0;
    }
    // The inscribed angle ψ at m satisfies g = -cot(ψ/2) = -sin ψ / (1 - cos ψ).
    let l = u.length() * v.length();
    -c / (l - u.dot(&v))
}

/// Point and unit tangent at parameter `s`, with `s = 0` at `p` and `s = 1`
/// at `q`. The tangent points towards increasing `s`.
#[must_use]
pub fn parameterize(p: &Point, q: &Point, g: f64, s: f64) -> (Point, Direction) {
    if is_straight(g) {
        return (*p + (*q - *p) * s, Direction::between(p, q));
    }
    let arc = circle_of(p, q, g);
    let angle = arc.start_angle + sweep(g) * s;
    let (sn, cs) = angle.sin_cos();
    let point = arc.center + Vector::new(cs, sn) * arc.radius;
    let tangent = if g > 0.0 {
        Direction::from_angle(angle + FRAC_PI_2)
    } else {
        Direction::from_angle(angle - FRAC_PI_2)
    };
    (point, tangent)
}

/// Length along the curve from `p` to `q`.
#[must_use]
pub fn arc_length(p: &Point, q: &Point, g: f64) -> f64 {
    if is_straight(g) {
        return distance(p, q);
    }
    circle_of(p, q, g).radius * sweep(g).abs()
}
