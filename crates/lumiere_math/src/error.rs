use thiserror::Error;

/// Errors raised when building geometry from invalid numbers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("coordinate is not a number")]
    NotANumber,

    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}

/// Result type for fallible geometry construction.
pub type MathResult<T> = Result<T, MathError>;
