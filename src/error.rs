use thiserror::Error;

/// Top-level error type for stairline.
#[derive(Debug, Error)]
pub enum StairlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors caused by the shape of the input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Errors raised by operations and their helpers.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid argument: {parameter} = {value} must not be negative")]
    InvalidArgument { parameter: &'static str, value: isize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`StairlineError`].
pub type Result<T> = std::result::Result<T, StairlineError>;
