// Re-export glam for convenience
pub use glam::*;

// Lumiere math types
mod error;
mod interval;
mod point;
mod vector;

pub use error::{MathError, MathResult};
pub use interval::Interval;
pub use point::Point3D;
pub use vector::Vector3D;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_from_dvec3() {
        let p = Point3D::from(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.z(), 3.0);
    }

    #[test]
    fn test_vector_operations() {
        let a = Vector3D::new(Point3D::ORIGIN, Point3D::new(1.0, 2.0, 3.0), false);
        let b = Vector3D::new(Point3D::ORIGIN, Point3D::new(4.0, 5.0, 6.0), false);
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(b.subtract(&a).direction, Point3D::new(3.0, 3.0, 3.0));
    }
}
