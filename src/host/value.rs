use crate::error::{DispatchError, Result};
use crate::geometry::{Arcseg, Poly, Ray};
use crate::math::{Direction, Point, Vector};

/// A kernel value as seen by an embedding host.
///
/// The set of types is closed; every host-facing query matches on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Point(Point),
    Direction(Direction),
    Vector(Vector),
    Ray(Ray),
    Arcseg(Arcseg),
    Poly(Poly),
}

/// Key for [`Value::field`]: a field name or a numeric index.
///
/// Numeric indices follow the host convention and start at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key<'a> {
    Name(&'a str),
    Index(f64),
}

/// Result of reading a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Number(f64),
    Value(Value),
    /// Point and tangent of an arc segment at a parameter.
    Sample(Point, Direction),
}

impl Value {
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Point(_) => "Point",
            Value::Direction(_) => "Direction",
            Value::Vector(_) => "Vector",
            Value::Ray(_) => "Ray",
            Value::Arcseg(_) => "Arcseg",
            Value::Poly(_) => "Poly",
        }
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        matches!(self, Value::Point(_))
    }

    #[must_use]
    pub fn is_direction(&self) -> bool {
        matches!(self, Value::Direction(_))
    }

    #[must_use]
    pub fn is_vector(&self) -> bool {
        matches!(self, Value::Vector(_))
    }

    #[must_use]
    pub fn is_ray(&self) -> bool {
        matches!(self, Value::Ray(_))
    }

    #[must_use]
    pub fn is_arcseg(&self) -> bool {
        matches!(self, Value::Arcseg(_))
    }

    #[must_use]
    pub fn is_poly(&self) -> bool {
        matches!(self, Value::Poly(_))
    }

    /// Reads a named or indexed field.
    ///
    /// | type      | names                                         | index             |
    /// |-----------|-----------------------------------------------|-------------------|
    /// | Point     | `x`, `y`                                      | 1, 2              |
    /// | Direction | `x`, `y`, `angle`, `rot`                      | 1, 2              |
    /// | Vector    | `x`, `y`, `length`, `angle`, `rot`            | 1, 2              |
    /// | Ray       | `origin`, `direction`                         |                   |
    /// | Arcseg    | `length`, `center`, `radius`, `angle`, `sweep`, `bulge` | parameter `s` |
    /// | Poly      | `n`                                           | vertex, 1-based   |
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidIndex` for any other key.
    pub fn field(&self, key: Key<'_>) -> Result<Field> {
        let field = match (self, key) {
            (Value::Point(p), key) => coordinate(p.x, p.y, key),
            (Value::Direction(d), Key::Name("angle")) => Some(Field::Number(d.angle())),
            (Value::Direction(d), Key::Name("rot")) => Some(Field::Value(Value::Direction(!*d))),
            (Value::Direction(d), key) => coordinate(d.x(), d.y(), key),
            (Value::Vector(v), Key::Name("length")) => Some(Field::Number(v.length())),
            (Value::Vector(v), Key::Name("angle")) => Some(Field::Number(v.angle())),
            (Value::Vector(v), Key::Name("rot")) => Some(Field::Value(Value::Vector(!*v))),
            (Value::Vector(v), key) => coordinate(v.x, v.y, key),
            (Value::Ray(r), Key::Name("origin")) => Some(Field::Value(Value::Point(r.origin()))),
            (Value::Ray(r), Key::Name("direction")) => {
                Some(Field::Value(Value::Direction(r.direction())))
            }
            (Value::Arcseg(s), key) => arcseg_field(s, key),
            (Value::Poly(p), Key::Name("n")) => Some(Field::Number(count(p.num_vertices()))),
            (Value::Poly(p), Key::Index(i)) => {
                integer(i).map(|i| Field::Value(Value::Point(p.vertex(i - 1))))
            }
            _ => None,
        };
        field.ok_or_else(|| DispatchError::InvalidIndex(self.type_name()).into())
    }

    /// Edge `i` of a Poly, 1-based and wrapped like vertex indexing.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidCall` if `self` is not a Poly and
    /// `DispatchError::InvalidIndex` if `i` is not a whole number.
    pub fn arcseg(&self, i: f64) -> Result<Value> {
        let Value::Poly(p) = self else {
            return Err(DispatchError::InvalidCall("arcseg").into());
        };
        integer(i)
            .map(|i| Value::Arcseg(p.edge(i - 1)))
            .ok_or_else(|| DispatchError::InvalidIndex("Poly").into())
    }
}

fn coordinate(x: f64, y: f64, key: Key<'_>) -> Option<Field> {
    match key {
        Key::Name("x") => Some(Field::Number(x)),
        Key::Name("y") => Some(Field::Number(y)),
        Key::Index(i) => match integer(i) {
            Some(1) => Some(Field::Number(x)),
            Some(2) => Some(Field::Number(y)),
            _ => None,
        },
        Key::Name(_) => None,
    }
}

fn arcseg_field(s: &Arcseg, key: Key<'_>) -> Option<Field> {
    match key {
        Key::Index(t) => {
            let sample = s.at(t);
            Some(Field::Sample(sample.origin(), sample.direction()))
        }
        Key::Name("length") => Some(Field::Number(s.length())),
        Key::Name("center") => Some(Field::Value(Value::Point(s.center()))),
        Key::Name("radius") => Some(Field::Number(s.radius())),
        Key::Name("angle") => Some(Field::Number(s.angle())),
        Key::Name("sweep") => Some(Field::Number(s.sweep())),
        Key::Name("bulge") => Some(Field::Number(s.bulge())),
        Key::Name(_) => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn count(n: usize) -> f64 {
    n as f64
}

/// `Some(i)` if `x` is a whole number that fits an `i64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integer(x: f64) -> Option<i64> {
    if x.fract() == 0.0 && x.abs() < i64::MAX as f64 {
        Some(x as i64)
    } else {
        None
    }
}

impl From<Point> for Value {
    fn from(p: Point) -> Self {
        Value::Point(p)
    }
}

impl From<Direction> for Value {
    fn from(d: Direction) -> Self {
        Value::Direction(d)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<Ray> for Value {
    fn from(r: Ray) -> Self {
        Value::Ray(r)
    }
}

impl From<Arcseg> for Value {
    fn from(s: Arcseg) -> Self {
        Value::Arcseg(s)
    }
}

impl From<Poly> for Value {
    fn from(p: Poly) -> Self {
        Value::Poly(p)
    }
}
