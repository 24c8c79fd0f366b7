//! Sphere primitive for ray tracing.

use lumiere_math::{Interval, Point3D, Vector3D};

use crate::error::{check_point, RenderError, RenderResult};
use crate::shape::{Impact, Shape};
use crate::Surface;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3D,
    radius: f64,
    surface: Surface,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Point3D, radius: f64, surface: Surface) -> RenderResult<Self> {
        let center = check_point("sphere center", center)?;
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            surface,
        })
    }

    pub fn position(&self) -> Point3D {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance along `vector` (after normalization) to the nearest surface
    /// point in front of its origin. From inside the sphere this is the far
    /// root.
    pub(crate) fn hit_distance(&self, vector: &Vector3D) -> Option<f64> {
        let unit = vector.normalize();
        let oc = self.center - unit.origin;
        let h = unit.direction.dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = h - sqrtd;
        if !Interval::FORWARD.contains(root) {
            root = h + sqrtd;
            if !Interval::FORWARD.contains(root) {
                return None;
            }
        }
        Some(root)
    }
}

impl Shape for Sphere {
    fn is_hit(&self, vector: &Vector3D) -> Option<Impact<'_>> {
        let t = self.hit_distance(vector)?;
        let point = vector.normalize().at(t);
        Some(Impact::new(point, t, self, *vector))
    }

    fn normal_at(&self, point: Point3D) -> Vector3D {
        Vector3D::new(point, (point - self.center) * (1.0 / self.radius), false)
    }

    fn center(&self) -> Option<Point3D> {
        Some(self.center)
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
