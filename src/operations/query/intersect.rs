use std::f64::consts::TAU;

use tracing::trace;

use crate::geometry::{Arcseg, Poly, Ray};
use crate::math::arc_2d::ArcCircle;
use crate::math::{distance, Point, Tolerance, TOLERANCE};

use super::distance_along;

/// Intersection point of two lines.
///
/// Returns [`Point::infinity`] when the directions are exactly parallel,
/// including coincident lines.
#[must_use]
pub fn intersect_rays(u: &Ray, v: &Ray) -> Point {
    intersect_rays_with(u, v, &Tolerance::EXACT)
}

/// [`intersect_rays`] with a configurable parallelism threshold.
#[must_use]
pub fn intersect_rays_with(u: &Ray, v: &Ray, tol: &Tolerance) -> Point {
    // u.p + s * u.d == v.p + t * v.d
    // s * (v.d x u.d) == v.d x (v.p - u.p)
    let (up, ud) = (u.origin(), u.direction());
    let (vp, vd) = (v.origin(), v.direction());
    let uvx = vp.x - up.x;
    let uvy = vp.y - up.y;
    let num = vd.x() * uvy - vd.y() * uvx;
    let den = vd.x() * ud.y() - vd.y() * ud.x();
    if tol.is_parallel(den) {
        trace!(cross = den, "parallel lines");
        return Point::infinity();
    }
    u.point_at(num / den)
}

/// Points where the line `ray` meets the arc segment `arc`, in the order of
/// the line parameter roots (0, 1 or 2 points).
///
/// The line is unbounded in both directions. The arc is half-open: its start
/// point belongs to it, its end point does not, so a closed chain of arcs
/// reports a shared vertex once.
#[must_use]
pub fn intersect_ray_arcseg(ray: &Ray, arc: &Arcseg) -> Vec<Point> {
    intersect_ray_arcseg_with(ray, arc, &Tolerance::EXACT)
}

/// Same as [`intersect_ray_arcseg`] with the arguments swapped.
#[must_use]
pub fn intersect_arcseg_ray(arc: &Arcseg, ray: &Ray) -> Vec<Point> {
    intersect_ray_arcseg(ray, arc)
}

/// [`intersect_ray_arcseg`] with configurable tangency and parallelism
/// thresholds.
#[must_use]
pub fn intersect_ray_arcseg_with(ray: &Ray, arc: &Arcseg, tol: &Tolerance) -> Vec<Point> {
    if arc.is_line() {
        return intersect_ray_segment(ray, arc, tol);
    }

    let circle = arc.circle();
    circle_crossings(ray, &circle, tol)
        .into_iter()
        .filter(|pt| on_arc_span(&circle, arc.bulge(), pt))
        .collect()
}

/// Points where the line `ray` meets the edges of `poly`, edge by edge.
///
/// A vertex lying on the line is reported once, by the edge that starts
/// there. Which side of the line each vertex is on is decided once for the
/// whole poly, so the two edges sharing a vertex always agree on it.
#[must_use]
pub fn intersect_ray_poly(ray: &Ray, poly: &Poly) -> Vec<Point> {
    intersect_ray_poly_with(ray, poly, &Tolerance::EXACT)
}

/// [`intersect_ray_poly`] with configurable thresholds.
///
/// `tol` applies to the tangency check of arc edges. Vertices within
/// [`TOLERANCE`] of the line count as on it.
#[must_use]
pub fn intersect_ray_poly_with(ray: &Ray, poly: &Poly, tol: &Tolerance) -> Vec<Point> {
    let origin = ray.origin();
    let d = ray.direction().to_vector();
    let sides: Vec<f64> = poly
        .vertices()
        .map(|v| d.cross(&(v.point - origin)))
        .collect();
    let on_line = |side: f64| side.abs() <= TOLERANCE;

    let n = sides.len();
    let mut hits = Vec::new();
    for (i, edge) in poly.edges().enumerate() {
        let (a, b) = (sides[i], sides[(i + 1) % n]);
        if on_line(a) {
            hits.push(edge.start());
        }
        if edge.is_line() {
            // Interior crossing only when the endpoints are strictly on
            // opposite sides.
            if !on_line(a) && !on_line(b) && (a < 0.0) != (b < 0.0) {
                let t = a / (a - b);
                hits.push(edge.start() + (edge.end() - edge.start()) * t);
            }
        } else {
            let circle = edge.circle();
            hits.extend(
                circle_crossings(ray, &circle, tol)
                    .into_iter()
                    .filter(|pt| {
                        distance(pt, &edge.start()) > TOLERANCE
                            && distance(pt, &edge.end()) > TOLERANCE
                    })
                    .filter(|pt| on_arc_span(&circle, edge.bulge(), pt)),
            );
        }
    }
    trace!(vertices = n, hits = hits.len(), "line against poly");
    hits
}

/// Points where the line `ray` meets `circle`, in the order of the line
/// parameter roots.
fn circle_crossings(ray: &Ray, circle: &ArcCircle, tol: &Tolerance) -> Vec<Point> {
    let a = ray.origin();
    let d = ray.direction().to_vector();

    // Points a + t*d on the circle satisfy
    //   |(a - c) + t*d|^2 = r^2
    //   t^2 + 2*t*p + q = 0
    // with p = (a-c).d / d.d and q = (|a-c|^2 - r^2) / d.d.
    let ca = a - circle.center;
    let dd = d.dot(&d);
    let p = ca.dot(&d) / dd;
    let q = (ca.dot(&ca) - circle.radius * circle.radius) / dd;
    let disc = p * p - q;

    let roots = if tol.is_tangent(disc) {
        vec![-p]
    } else if disc < 0.0 {
        trace!(discriminant = disc, "line misses supporting circle");
        return Vec::new();
    } else {
        let s = disc.sqrt();
        vec![-p - s, -p + s]
    };
    trace!(discriminant = disc, roots = roots.len(), "line meets supporting circle");

    roots.into_iter().map(|t| a + d * t).collect()
}

/// Whether `pt`, a point on the supporting circle, lies within the angular
/// span `[start_angle, end_angle)` swept in the turning sense of `bulge`.
fn on_arc_span(circle: &ArcCircle, bulge: f64, pt: &Point) -> bool {
    let theta0 = circle.start_angle;
    let mut theta1 = circle.end_angle;
    let mut theta = (pt.y - circle.center.y).atan2(pt.x - circle.center.x);
    if bulge >= 0.0 {
        if theta1 < theta0 {
            theta1 += TAU;
        }
        if theta < theta0 {
            theta += TAU;
        }
        theta < theta1
    } else {
        if theta1 > theta0 {
            theta1 -= TAU;
        }
        if theta > theta0 {
            theta -= TAU;
        }
        theta > theta1
    }
}

/// Line against a straight arc segment, half-open like the arc case.
fn intersect_ray_segment(ray: &Ray, seg: &Arcseg, tol: &Tolerance) -> Vec<Point> {
    let chord = Ray::new(seg.start(), seg.chord_direction());
    let pt = intersect_rays_with(ray, &chord, tol);
    if pt.is_infinity() {
        return Vec::new();
    }
    let s = distance_along(&chord, &pt);
    if s >= 0.0 && s < seg.length() {
        vec![pt]
    } else {
        Vec::new()
    }
}
