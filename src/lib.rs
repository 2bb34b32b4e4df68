//! A 2-D sketch geometry kernel.
//!
//! Points, directions and vectors live in [`math`]; lines, bulge arcs and
//! closed polys live in [`geometry`]. Distance, angle and intersection
//! queries are in [`operations::query`], affine maps in
//! [`operations::transform`], and [`host`] exposes everything to a
//! dynamically typed embedding through tagged-variant dispatch.

pub mod error;
pub mod geometry;
pub mod host;
pub mod math;
pub mod operations;

pub use error::{KernelError, Result};
