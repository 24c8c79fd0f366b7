//! View rays tagged with the pixel they contribute to.
//!
//! Several rays may share one pixel when supersampling; their colors are
//! averaged by the render driver.

use lumiere_math::{Point3D, Vector3D};

/// A vector cast through the screen for pixel (`row`, `column`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Pixel row (0 is the top of the image)
    row: u32,
    /// Pixel column (0 is the left of the image)
    column: u32,
    /// Origin and direction of the ray
    vector: Vector3D,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(row: u32, column: u32, vector: Vector3D) -> Self {
        Self {
            row,
            column,
            vector,
        }
    }

    /// Create a view ray from `origin` toward `direction`.
    #[inline]
    pub fn view(row: u32, column: u32, origin: Point3D, direction: Point3D) -> Self {
        Self::new(row, column, Vector3D::new(origin, direction, false))
    }

    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Get the ray's vector.
    #[inline]
    pub fn vector(&self) -> &Vector3D {
        &self.vector
    }

    /// True if the underlying vector is a shadow probe.
    #[inline]
    pub fn is_probe(&self) -> bool {
        self.vector.is_probe()
    }
}
