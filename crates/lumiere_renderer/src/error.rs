use lumiere_math::{MathError, Point3D};
use thiserror::Error;

/// Errors that can occur while building or rendering a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid geometry: {0}")]
    Math(#[from] MathError),

    #[error("{name} must be a finite point")]
    NonFinitePoint { name: &'static str },

    #[error("screen dimensions must be positive, got {width} x {height}")]
    InvalidScreenSize { width: f64, height: f64 },

    #[error("pixel counts must be positive, got {x} x {y}")]
    InvalidPixelCount { x: u32, y: u32 },

    #[error("radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("{name} coefficient must be non-negative, got {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("samples per axis must be between 1 and {max}, got {0}", max = crate::config::MAX_SAMPLES_PER_AXIS)]
    InvalidSampleCount(u32),

    #[error("bucket size must be at least 1")]
    InvalidBucketSize,
}

/// Result type for scene construction and rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Reject negative or NaN material and attenuation coefficients.
pub(crate) fn check_coefficient(name: &'static str, value: f64) -> RenderResult<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(RenderError::InvalidCoefficient { name, value });
    }
    Ok(value)
}

/// Reject points with NaN or infinite components.
pub(crate) fn check_point(name: &'static str, point: Point3D) -> RenderResult<Point3D> {
    if !point.is_finite() {
        return Err(RenderError::NonFinitePoint { name });
    }
    Ok(point)
}
