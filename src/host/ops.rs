//! Host arithmetic operators.
//!
//! Scripting hosts funnel `+ - * / ^ ..` and unary `- #` on kernel values
//! through [`binary`] and [`unary`]; the operand types pick the overload.

use tracing::debug;

use crate::error::{DispatchError, KernelError, Result};
use crate::geometry::{Arcseg, Poly, Ray};
use crate::math::{Direction, Point, Vector};

use super::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `^`: z-component of the cross product.
    Cross,
    /// `..`: dot product.
    Dot,
}

impl BinaryOp {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Cross => "^",
            BinaryOp::Dot => "..",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    /// `#`: length.
    Len,
}

impl UnaryOp {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Len => "#",
        }
    }
}

/// An operator operand or result: a plain number or a kernel value.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Value(Value),
}

impl Operand {
    fn type_name(&self) -> &'static str {
        match self {
            Operand::Number(_) => "number",
            Operand::Value(v) => v.type_name(),
        }
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Number(x)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

macro_rules! operand_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Value(v.into())
                }
            }
        )*
    };
}

operand_from_value!(Point, Direction, Vector, Ray, Arcseg, Poly);

/// Applies `op` to two operands.
///
/// | op    | lhs              | rhs              | result    |
/// |-------|------------------|------------------|-----------|
/// | `+`   | Point            | Vector           | Point     |
/// | `+`   | Vector           | Vector           | Vector    |
/// | `-`   | Point            | Point            | Vector    |
/// | `-`   | Point            | Vector           | Point     |
/// | `-`   | Vector           | Vector           | Vector    |
/// | `*`   | Vector/Direction | number           | Vector    |
/// | `*`   | number           | Vector/Direction | Vector    |
/// | `/`   | Vector           | number           | Vector    |
/// | `^`   | Vector           | Vector           | number    |
/// | `..`  | Vector           | Vector           | number    |
///
/// `p - q` is the vector from `q` to `p`. Hosts built on the older
/// bindings, where `p - q` gave the vector from `p` to `q`, must swap the
/// operands.
///
/// # Errors
///
/// Returns `DispatchError::InvalidOperands` for any other combination.
pub fn binary(op: BinaryOp, lhs: &Operand, rhs: &Operand) -> Result<Operand> {
    use Operand::{Number as N, Value as V};
    use Value::{Direction as D, Point as P, Vector as W};

    let out = match (op, lhs, rhs) {
        (BinaryOp::Add, V(P(p)), V(W(v))) => (*p + *v).into(),
        (BinaryOp::Add, V(W(u)), V(W(v))) => (*u + *v).into(),
        (BinaryOp::Sub, V(P(p)), V(P(q))) => (*p - *q).into(),
        (BinaryOp::Sub, V(P(p)), V(W(v))) => (*p - *v).into(),
        (BinaryOp::Sub, V(W(u)), V(W(v))) => (*u - *v).into(),
        (BinaryOp::Mul, V(W(v)), N(t)) | (BinaryOp::Mul, N(t), V(W(v))) => (*v * *t).into(),
        (BinaryOp::Mul, V(D(d)), N(t)) | (BinaryOp::Mul, N(t), V(D(d))) => (*d * *t).into(),
        (BinaryOp::Div, V(W(v)), N(t)) => (*v / *t).into(),
        (BinaryOp::Cross, V(W(u)), V(W(v))) => Operand::Number(u.cross(v)),
        (BinaryOp::Dot, V(W(u)), V(W(v))) => Operand::Number(u.dot(v)),
        _ => return Err(invalid_operands(op.symbol(), lhs, rhs)),
    };
    Ok(out)
}

/// Applies `op` to one value.
///
/// `-` reverses a Vector, Direction or Arcseg; `#` is the length of a Vector
/// or Arcseg.
///
/// # Errors
///
/// Returns `DispatchError::InvalidOperands` for any other type.
pub fn unary(op: UnaryOp, value: &Value) -> Result<Operand> {
    let out = match (op, value) {
        (UnaryOp::Neg, Value::Vector(v)) => (-*v).into(),
        (UnaryOp::Neg, Value::Direction(d)) => (-*d).into(),
        (UnaryOp::Neg, Value::Arcseg(s)) => (-*s).into(),
        (UnaryOp::Len, Value::Vector(v)) => Operand::Number(v.length()),
        (UnaryOp::Len, Value::Arcseg(s)) => Operand::Number(s.length()),
        _ => {
            let operand = Operand::Value(value.clone());
            return Err(invalid_operands(op.symbol(), &operand, &operand));
        }
    };
    Ok(out)
}

fn invalid_operands(op: &'static str, lhs: &Operand, rhs: &Operand) -> KernelError {
    let (lhs, rhs) = (lhs.type_name(), rhs.type_name());
    debug!(op, lhs, rhs, "no operator overload");
    DispatchError::InvalidOperands { op, lhs, rhs }.into()
}
