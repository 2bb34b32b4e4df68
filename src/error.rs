use thiserror::Error;

/// Top-level error type for the sketch kernel.
///
/// Degenerate geometry is not an error here: it is reported through NaN
/// sentinels such as [`Point::infinity`](crate::math::Point::infinity).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KernelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("poly needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("arcseg chain is not connected at edge {0}")]
    DisconnectedChain(usize),
}

/// Errors raised by the host-facing dispatch layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    #[error("invalid syntax for creating a {0}")]
    InvalidConstructor(&'static str),

    #[error("invalid call to {0}")]
    InvalidCall(&'static str),

    #[error("invalid indexing of a {0}")]
    InvalidIndex(&'static str),

    #[error("invalid operands for `{op}`: {lhs} and {rhs}")]
    InvalidOperands {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

/// Convenience type alias for results using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;
