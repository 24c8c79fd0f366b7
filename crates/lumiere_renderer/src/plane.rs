//! Infinite plane primitive.

use lumiere_math::{Interval, Point3D, Vector3D};

use crate::error::{check_point, RenderResult};
use crate::shape::{Impact, Shape};
use crate::Surface;

/// An infinite plane through `point` with a constant `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Point3D,
    normal: Point3D,
    surface: Surface,
}

impl Plane {
    /// Create a new plane. The normal is stored normalized and must not be
    /// zero.
    pub fn new(point: Point3D, normal: Point3D, surface: Surface) -> RenderResult<Self> {
        let point = check_point("plane point", point)?;
        let normal = check_point("plane normal", normal)?.try_normalize()?;
        Ok(Self {
            point,
            normal,
            surface,
        })
    }

    /// A point on the plane.
    pub fn point(&self) -> Point3D {
        self.point
    }

    /// The unit normal of the plane.
    pub fn normal(&self) -> Point3D {
        self.normal
    }
}

impl Shape for Plane {
    fn is_hit(&self, vector: &Vector3D) -> Option<Impact<'_>> {
        let unit = vector.normalize();
        let denom = unit.direction.dot(&self.normal);
        // Parallel, including vectors lying in the plane.
        if denom == 0.0 {
            return None;
        }

        let t = self.normal.dot(&(self.point - vector.origin)) / denom;
        if !Interval::FORWARD.contains(t) {
            return None;
        }

        Some(Impact::new(unit.at(t), t, self, *vector))
    }

    fn normal_at(&self, point: Point3D) -> Vector3D {
        Vector3D::new(point, self.normal, false)
    }

    fn center(&self) -> Option<Point3D> {
        None
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
