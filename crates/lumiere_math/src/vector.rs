use crate::Point3D;

/// A directed line in 3D space.
///
/// `direction` is not necessarily unit length. `probe` marks vectors cast from
/// a light toward a surface point to test occlusion, as opposed to view rays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector3D {
    pub origin: Point3D,
    pub direction: Point3D,
    pub probe: bool,
}

impl Vector3D {
    /// Create a new vector.
    pub fn new(origin: Point3D, direction: Point3D, probe: bool) -> Self {
        Self {
            origin,
            direction,
            probe,
        }
    }

    /// Get the origin point of the vector.
    #[inline]
    pub fn origin(&self) -> Point3D {
        self.origin
    }

    /// Get the direction of the vector.
    #[inline]
    pub fn direction(&self) -> Point3D {
        self.direction
    }

    /// True if this vector is a shadow probe.
    #[inline]
    pub fn is_probe(&self) -> bool {
        self.probe
    }

    /// Same origin, opposite direction.
    pub fn negate(&self) -> Vector3D {
        Vector3D::new(self.origin, -self.direction, self.probe)
    }

    /// Same origin, direction scaled by `a`.
    pub fn scale(&self, a: f64) -> Vector3D {
        Vector3D::new(self.origin, self.direction * a, self.probe)
    }

    /// Same origin, unit direction. The direction must not be zero.
    pub fn normalize(&self) -> Vector3D {
        Vector3D::new(self.origin, self.direction.normalize(), self.probe)
    }

    /// Componentwise difference of the directions, keeping `self`'s origin.
    pub fn subtract(&self, other: &Vector3D) -> Vector3D {
        Vector3D::new(self.origin, self.direction - other.direction, self.probe)
    }

    /// Dot product of the two directions.
    #[inline]
    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.direction.dot(&other.direction)
    }

    /// Get the point along the vector at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3D {
        self.origin + self.direction * t
    }
}
