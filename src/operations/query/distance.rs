use crate::geometry::Ray;
use crate::math::Point;

/// Signed position of `p` along `ray`: the projection of `p - origin` onto
/// the ray direction.
///
/// This is a line parameter, not the perpendicular distance to the line. A
/// point behind the origin gives a negative value.
#[must_use]
pub fn distance_along(ray: &Ray, p: &Point) -> f64 {
    let o = ray.origin();
    let d = ray.direction();
    (p.x - o.x) * d.x() + (p.y - o.y) * d.y()
}
