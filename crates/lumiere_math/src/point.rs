use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;

use crate::{MathError, MathResult};

/// An immutable point (or free direction) in 3D space.
///
/// Equality and hashing are exact: two points are equal only when their
/// components have identical bit patterns. There is no epsilon, so points
/// produced by different arithmetic paths rarely compare equal.
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Point3D(DVec3);

impl Point3D {
    /// The origin (0, 0, 0).
    pub const ORIGIN: Point3D = Point3D(DVec3::ZERO);

    /// Create a point without validating its components.
    ///
    /// Use [`Point3D::try_new`] for values that did not come from literals.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Create a point, rejecting NaN components.
    pub fn try_new(x: f64, y: f64, z: f64) -> MathResult<Self> {
        if x.is_nan() || y.is_nan() || z.is_nan() {
            return Err(MathError::NotANumber);
        }
        Ok(Self::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// The underlying glam vector.
    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Componentwise sum, `self + offset`.
    #[inline]
    pub fn translate(&self, offset: &Point3D) -> Point3D {
        Self(self.0 + offset.0)
    }

    #[inline]
    pub fn subtract(&self, other: &Point3D) -> Point3D {
        Self(self.0 - other.0)
    }

    #[inline]
    pub fn scale(&self, a: f64) -> Point3D {
        Self(self.0 * a)
    }

    /// Scale by `a`, rejecting a NaN factor.
    pub fn try_scale(&self, a: f64) -> MathResult<Point3D> {
        if a.is_nan() {
            return Err(MathError::NotANumber);
        }
        Ok(self.scale(a))
    }

    /// Dot product, treating both points as vectors from the origin.
    #[inline]
    pub fn dot(&self, other: &Point3D) -> f64 {
        self.0.dot(other.0)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(&self, other: &Point3D) -> f64 {
        self.0.distance(other.0)
    }

    /// Squared Euclidean distance. Cheaper than [`Point3D::distance`] when
    /// only comparing.
    #[inline]
    pub fn distance_squared(&self, other: &Point3D) -> f64 {
        self.0.distance_squared(other.0)
    }

    /// Distance from the origin.
    #[inline]
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Unit vector in the same direction.
    ///
    /// Normalizing a zero-length point divides by zero and yields NaN
    /// components. Callers must never do it; see [`Point3D::try_normalize`].
    #[inline]
    pub fn normalize(&self) -> Point3D {
        Self(self.0 / self.0.length())
    }

    /// Unit vector in the same direction, or an error for a zero or NaN vector.
    pub fn try_normalize(&self) -> MathResult<Point3D> {
        if self.0.is_nan() {
            return Err(MathError::NotANumber);
        }
        let length = self.0.length();
        if length == 0.0 {
            return Err(MathError::ZeroLength);
        }
        Ok(Self(self.0 / length))
    }
}

impl From<DVec3> for Point3D {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Point3D> for DVec3 {
    fn from(p: Point3D) -> Self {
        p.0
    }
}

impl PartialEq for Point3D {
    fn eq(&self, other: &Self) -> bool {
        self.0.x.to_bits() == other.0.x.to_bits()
            && self.0.y.to_bits() == other.0.y.to_bits()
            && self.0.z.to_bits() == other.0.z.to_bits()
    }
}

impl Eq for Point3D {}

impl Hash for Point3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.x.to_bits().hash(state);
        self.0.y.to_bits().hash(state);
        self.0.z.to_bits().hash(state);
    }
}

impl Add for Point3D {
    type Output = Point3D;

    #[inline]
    fn add(self, rhs: Point3D) -> Point3D {
        Point3D(self.0 + rhs.0)
    }
}

impl Sub for Point3D {
    type Output = Point3D;

    #[inline]
    fn sub(self, rhs: Point3D) -> Point3D {
        Point3D(self.0 - rhs.0)
    }
}

impl Mul<f64> for Point3D {
    type Output = Point3D;

    #[inline]
    fn mul(self, rhs: f64) -> Point3D {
        Point3D(self.0 * rhs)
    }
}

impl Neg for Point3D {
    type Output = Point3D;

    #[inline]
    fn neg(self) -> Point3D {
        Point3D(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_then_subtract_is_identity() {
        let samples = [
            (Point3D::new(1.0, 2.0, 3.0), Point3D::new(0.5, -4.0, 8.0)),
            (Point3D::new(-7.25, 0.0, 1e3), Point3D::new(2.0, 2.0, -2.0)),
            (Point3D::ORIGIN, Point3D::new(0.125, 0.25, 0.5)),
        ];
        for (a, b) in samples {
            assert_eq!(a.translate(&b).subtract(&b), a);
            assert_eq!((a + b) - b, a);
            assert_eq!(a.translate(&b), a + b);
        }
    }

    #[test]
    fn test_normalize_has_unit_length() {
        let points = [
            Point3D::new(3.0, 4.0, 0.0),
            Point3D::new(-1.0, 1.0, -1.0),
            Point3D::new(1e-3, 2e-3, -5e-4),
            Point3D::new(120.0, -0.5, 33.0),
        ];
        for p in points {
            let n = p.normalize();
            assert!((n.distance(&Point3D::ORIGIN) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_try_new_rejects_nan() {
        assert_eq!(Point3D::try_new(f64::NAN, 0.0, 0.0), Err(MathError::NotANumber));
        assert_eq!(Point3D::try_new(0.0, 0.0, f64::NAN), Err(MathError::NotANumber));
        assert!(Point3D::try_new(1.0, f64::INFINITY, 0.0).is_ok());
    }

    #[test]
    fn test_try_normalize_zero() {
        assert_eq!(Point3D::ORIGIN.try_normalize(), Err(MathError::ZeroLength));
        assert_eq!(
            Point3D::new(0.0, 0.0, 2.0).try_normalize(),
            Ok(Point3D::new(0.0, 0.0, 1.0))
        );
    }

    #[test]
    fn test_try_scale_rejects_nan() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(p.try_scale(f64::NAN), Err(MathError::NotANumber));
        assert_eq!(p.try_scale(2.0), Ok(Point3D::new(2.0, 4.0, 6.0)));
    }

    #[test]
    fn test_distances() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        let b = Point3D::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(a.dot(&b), 4.0 + 12.0 + 9.0);
    }

    #[test]
    fn test_exact_equality_and_hash() {
        let a = Point3D::new(0.1, 0.2, 0.3);
        let b = Point3D::new(0.1, 0.2, 0.3);
        let c = Point3D::new(0.1 + 1e-16, 0.2, 0.3 + 1e-15);
        assert_eq!(a, b);
        assert_ne!(a, c);
        // Signed zeros are distinct bit patterns.
        assert_ne!(Point3D::new(0.0, 0.0, 0.0), Point3D::new(-0.0, 0.0, 0.0));

        let set: HashSet<Point3D> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
