use tracing::debug;

use crate::error::{DispatchError, KernelError, Result};
use crate::math::{Point, Tolerance};
use crate::operations::query::{
    angle, distance, distance_along, intersect_ray_arcseg_with, intersect_ray_poly_with,
    intersect_rays_with,
};

use super::Value;

/// Result of [`Dispatcher::intersection`].
///
/// Line-line intersection has exactly one (possibly infinite) point; queries
/// against arcs and polys return a list.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    Point(Point),
    Points(Vec<Point>),
}

/// Routes the generic `Distance`, `Angle` and `Intersection` calls to the
/// typed query for the runtime types of both arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dispatcher {
    tolerance: Tolerance,
}

impl Dispatcher {
    /// A dispatcher using exact comparisons.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// `(Point, Point)`: Euclidean distance.
    /// `(Ray, Point)`: signed position of the point along the ray.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidCall` for any other pair.
    pub fn distance(&self, a: &Value, b: &Value) -> Result<f64> {
        match (a, b) {
            (Value::Point(p), Value::Point(q)) => Ok(distance(p, q)),
            (Value::Ray(r), Value::Point(p)) => Ok(distance_along(r, p)),
            _ => Err(invalid_call("Distance", a, b)),
        }
    }

    /// `(Direction, Direction)`: signed angle from the first to the second,
    /// in `(-π, π]`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidCall` for any other pair.
    pub fn angle(&self, a: &Value, b: &Value) -> Result<f64> {
        match (a, b) {
            (Value::Direction(d1), Value::Direction(d2)) => Ok(angle(d1, d2)),
            _ => Err(invalid_call("Angle", a, b)),
        }
    }

    /// Intersection of a ray with a ray, arc segment or poly, in either
    /// argument order.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Unsupported` for two arc segments and
    /// `DispatchError::InvalidCall` for any other pair.
    pub fn intersection(&self, a: &Value, b: &Value) -> Result<Intersection> {
        let tol = &self.tolerance;
        match (a, b) {
            (Value::Ray(u), Value::Ray(v)) => Ok(Intersection::Point(intersect_rays_with(u, v, tol))),
            (Value::Ray(r), Value::Arcseg(s)) | (Value::Arcseg(s), Value::Ray(r)) => {
                Ok(Intersection::Points(intersect_ray_arcseg_with(r, s, tol)))
            }
            (Value::Ray(r), Value::Poly(p)) | (Value::Poly(p), Value::Ray(r)) => {
                Ok(Intersection::Points(intersect_ray_poly_with(r, p, tol)))
            }
            (Value::Arcseg(_), Value::Arcseg(_)) => {
                debug!("arcseg-arcseg intersection requested");
                Err(DispatchError::Unsupported("Arcseg-Arcseg intersection").into())
            }
            _ => Err(invalid_call("Intersection", a, b)),
        }
    }
}

fn invalid_call(name: &'static str, a: &Value, b: &Value) -> KernelError {
    debug!(
        call = name,
        lhs = a.type_name(),
        rhs = b.type_name(),
        "no overload for argument types"
    );
    DispatchError::InvalidCall(name).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arcseg, Poly, Ray};
    use crate::math::Direction;
    use std::f64::consts::FRAC_PI_2;

    fn ray(ox: f64, oy: f64, dx: f64, dy: f64) -> Value {
        Ray::new(Point::new(ox, oy), Direction::new(dx, dy)).into()
    }

    #[test]
    fn distance_overloads() {
        let d = Dispatcher::new();
        let p = Value::from(Point::new(0.0, 0.0));
        let q = Value::from(Point::new(3.0, 4.0));
        assert!((d.distance(&p, &q).unwrap() - 5.0).abs() < 1e-12);
        assert!((d.distance(&ray(0.0, 0.0, 1.0, 0.0), &q).unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(
            d.distance(&q, &ray(0.0, 0.0, 1.0, 0.0)),
            Err(DispatchError::InvalidCall("Distance").into())
        );
    }

    #[test]
    fn angle_overload() {
        let d = Dispatcher::new();
        let a = Value::from(Direction::new(1.0, 0.0));
        let b = Value::from(Direction::new(0.0, 1.0));
        assert!((d.angle(&a, &b).unwrap() - FRAC_PI_2).abs() < 1e-12);
        assert!((d.angle(&b, &a).unwrap() + FRAC_PI_2).abs() < 1e-12);
        assert!(d.angle(&a, &Value::from(Point::new(0.0, 1.0))).is_err());
    }

    #[test]
    fn ray_ray_is_single_point() {
        let d = Dispatcher::new();
        let hit = d
            .intersection(&ray(0.0, 0.0, 1.0, 0.0), &ray(2.0, -1.0, 0.0, 1.0))
            .unwrap();
        assert_eq!(hit, Intersection::Point(Point::new(2.0, 0.0)));

        match d
            .intersection(&ray(0.0, 0.0, 1.0, 0.0), &ray(0.0, 1.0, -1.0, 0.0))
            .unwrap()
        {
            Intersection::Point(p) => assert!(p.is_infinity()),
            Intersection::Points(_) => panic!("expected a single point"),
        }
    }

    #[test]
    fn near_parallel_with_tolerance() {
        let u = ray(0.0, 0.0, 1.0, 0.0);
        let v = ray(0.0, 1.0, 1.0, 1e-14);
        match Dispatcher::new().intersection(&u, &v).unwrap() {
            Intersection::Point(p) => assert!(!p.is_infinity()),
            Intersection::Points(_) => panic!("expected a single point"),
        }
        let loose = Dispatcher::with_tolerance(Tolerance::uniform(1e-9));
        match loose.intersection(&u, &v).unwrap() {
            Intersection::Point(p) => assert!(p.is_infinity()),
            Intersection::Points(_) => panic!("expected a single point"),
        }
    }

    #[test]
    fn ray_arcseg_in_either_order() {
        let d = Dispatcher::new();
        let r = ray(0.0, -5.0, 0.0, 1.0);
        let s = Value::from(Arcseg::new(Point::new(1.0, 0.0), Point::new(-1.0, 0.0), 1.0));
        let ab = d.intersection(&r, &s).unwrap();
        let ba = d.intersection(&s, &r).unwrap();
        assert_eq!(ab, ba);
        match ab {
            Intersection::Points(pts) => {
                assert_eq!(pts.len(), 1);
                assert!((pts[0].y - 1.0).abs() < 1e-12);
            }
            Intersection::Point(_) => panic!("expected a list"),
        }
    }

    #[test]
    fn ray_poly() {
        let d = Dispatcher::new();
        let circle = Value::from(Poly::circle(Point::new(0.0, 0.0), 1.0));
        match d.intersection(&ray(-5.0, 0.5, 1.0, 0.0), &circle).unwrap() {
            Intersection::Points(pts) => assert_eq!(pts.len(), 2),
            Intersection::Point(_) => panic!("expected a list"),
        }
    }

    #[test]
    fn arcseg_pair_is_unsupported() {
        let s = Value::from(Arcseg::new(Point::new(1.0, 0.0), Point::new(-1.0, 0.0), 1.0));
        assert_eq!(
            Dispatcher::new().intersection(&s, &s),
            Err(DispatchError::Unsupported("Arcseg-Arcseg intersection").into())
        );
    }

    #[test]
    fn invalid_pairs() {
        let d = Dispatcher::new();
        let p = Value::from(Point::new(0.0, 0.0));
        assert_eq!(
            d.intersection(&p, &ray(0.0, 0.0, 1.0, 0.0)),
            Err(DispatchError::InvalidCall("Intersection").into())
        );
    }
}
