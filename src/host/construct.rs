//! Constructors taking loosely-typed host arguments.
//!
//! Each `construct_*` function accepts the argument shapes a scripting host
//! passes to the type's constructor and rejects everything else with
//! [`DispatchError::InvalidConstructor`].

use tracing::debug;

use crate::error::{DispatchError, KernelError, Result};
use crate::geometry::{Arcseg, Poly, Ray};
use crate::math::{Direction, Point, Vector};

use super::Value;

/// A constructor argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Number(f64),
    /// A two-element table such as `{x, y}`.
    Pair(f64, f64),
    /// A table of values.
    List(Vec<Value>),
    Value(Value),
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Arg::Number(x)
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

macro_rules! arg_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Arg::Value(v.into())
                }
            }
        )*
    };
}

arg_from_value!(Point, Direction, Vector, Ray, Arcseg, Poly);

fn invalid(type_name: &'static str, args: &[Arg]) -> KernelError {
    debug!(type_name, nargs = args.len(), "rejected constructor arguments");
    DispatchError::InvalidConstructor(type_name).into()
}

/// `Point(x, y)` or `Point({x, y})`.
///
/// # Errors
///
/// Returns `DispatchError::InvalidConstructor` for any other shape.
pub fn construct_point(args: &[Arg]) -> Result<Point> {
    match args {
        [Arg::Number(x), Arg::Number(y)] | [Arg::Pair(x, y)] => Ok(Point::new(*x, *y)),
        _ => Err(invalid("Point", args)),
    }
}

/// `Direction(p, q)`, `Direction(x, y)`, `Direction({x, y})` or
/// `Direction(angle)`.
///
/// # Errors
///
/// Returns `DispatchError::InvalidConstructor` for any other shape.
pub fn construct_direction(args: &[Arg]) -> Result<Direction> {
    match args {
        [Arg::Value(Value::Point(p)), Arg::Value(Value::Point(q))] => Ok(Direction::between(p, q)),
        [Arg::Number(x), Arg::Number(y)] | [Arg::Pair(x, y)] => Ok(Direction::new(*x, *y)),
        [Arg::Number(a)] => Ok(Direction::from_angle(*a)),
        _ => Err(invalid("Direction", args)),
    }
}

/// `Vector(p, q)` (from `p` to `q`), `Vector(x, y)`, `Vector({x, y})` or
/// `Vector(direction, length)`.
///
/// # Errors
///
/// Returns `DispatchError::InvalidConstructor` for any other shape.
pub fn construct_vector(args: &[Arg]) -> Result<Vector> {
    match args {
        [Arg::Value(Value::Point(p)), Arg::Value(Value::Point(q))] => Ok(Vector::between(p, q)),
        [Arg::Number(x), Arg::Number(y)] | [Arg::Pair(x, y)] => Ok(Vector::new(*x, *y)),
        [Arg::Value(Value::Direction(d)), Arg::Number(t)] => Ok(Vector::from_direction(d, *t)),
        _ => Err(invalid("Vector", args)),
    }
}

/// `Ray(origin, direction)` or `Ray(origin, vector)`.
///
/// # Errors
///
/// Returns `DispatchError::InvalidConstructor` for any other shape.
pub fn construct_ray(args: &[Arg]) -> Result<Ray> {
    match args {
        [Arg::Value(Value::Point(p)), Arg::Value(Value::Direction(d))] => Ok(Ray::new(*p, *d)),
        [Arg::Value(Value::Point(p)), Arg::Value(Value::Vector(v))] => Ok(Ray::from_vector(*p, *v)),
        _ => Err(invalid("Ray", args)),
    }
}

/// `Arcseg(p, q)` (straight), `Arcseg(p, q, bulge)` or `Arcseg(p, q, m)`
/// (the arc from `p` to `q` through `m`).
///
/// # Errors
///
/// Returns `DispatchError::InvalidConstructor` for any other shape.
pub fn construct_arcseg(args: &[Arg]) -> Result<Arcseg> {
    match args {
        [Arg::Value(Value::Point(p)), Arg::Value(Value::Point(q))] => Ok(Arcseg::line(*p, *q)),
        [Arg::Value(Value::Point(p)), Arg::Value(Value::Point(q)), Arg::Number(g)] => {
            Ok(Arcseg::new(*p, *q, *g))
        }
        [Arg::Value(Value::Point(p)), Arg::Value(Value::Point(q)), Arg::Value(Value::Point(m))] => {
            Ok(Arcseg::through(*p, *q, m))
        }
        _ => Err(invalid("Arcseg", args)),
    }
}

/// `Poly(p1, p2, p3, ...)` with at least three points, `Poly({p1, p2, ...})`,
/// or the same two forms with a closed chain of arc segments.
///
/// # Errors
///
/// Returns `DispatchError::InvalidConstructor` for any other shape, and the
/// `GeometryError` of [`Poly::from_points`] or [`Poly::from_arcsegs`] when
/// the shape is right but the contents are not.
pub fn construct_poly(args: &[Arg]) -> Result<Poly> {
    let values: Vec<&Value> = match args {
        [Arg::List(items)] => items.iter().collect(),
        _ if args.len() >= 3 => args
            .iter()
            .map(|a| match a {
                Arg::Value(v) => Some(v),
                _ => None,
            })
            .collect::<Option<_>>()
            .ok_or_else(|| invalid("Poly", args))?,
        _ => return Err(invalid("Poly", args)),
    };

    if let Some(points) = collect_points(&values) {
        return Poly::from_points(&points);
    }
    if let Some(segments) = collect_arcsegs(&values) {
        return Poly::from_arcsegs(&segments);
    }
    Err(invalid("Poly", args))
}

/// `Circle(center, radius)`: a poly of two semicircles.
///
/// # Errors
///
/// Returns `DispatchError::InvalidConstructor` for any other shape.
pub fn construct_circle(args: &[Arg]) -> Result<Poly> {
    match args {
        [Arg::Value(Value::Point(c)), Arg::Number(r)] => Ok(Poly::circle(*c, *r)),
        _ => Err(invalid("Circle", args)),
    }
}

fn collect_points(values: &[&Value]) -> Option<Vec<Point>> {
    values
        .iter()
        .map(|v| match v {
            Value::Point(p) => Some(*p),
            _ => None,
        })
        .collect()
}

fn collect_arcsegs(values: &[&Value]) -> Option<Vec<Arcseg>> {
    values
        .iter()
        .map(|v| match v {
            Value::Arcseg(s) => Some(*s),
            _ => None,
        })
        .collect()
}
