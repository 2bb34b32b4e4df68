//! Host-facing layer for embedding the kernel in a scripting environment.
//!
//! Values cross the boundary as the closed [`Value`] enum. Constructors take
//! loosely-typed [`Arg`] lists, operators and queries dispatch on the runtime
//! types of their operands, and every rejected combination is reported as a
//! [`DispatchError`](crate::error::DispatchError).

mod construct;
mod dispatch;
mod ops;
mod value;

pub use construct::{
    construct_arcseg, construct_circle, construct_direction, construct_point, construct_poly,
    construct_ray, construct_vector, Arg,
};
pub use dispatch::{Dispatcher, Intersection};
pub use ops::{binary, unary, BinaryOp, Operand, UnaryOp};
pub use value::{Field, Key, Value};
