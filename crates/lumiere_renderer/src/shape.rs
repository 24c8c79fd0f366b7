//! Shape trait and Impact record for ray-object intersection.

use std::fmt;

use lumiere_math::{Point3D, Vector3D};

use crate::{Light, Surface};

/// Record of a vector hitting a shape.
///
/// The impact borrows the shape; shapes are owned by the scene and outlive
/// every impact computed during a render.
#[derive(Clone, Copy)]
pub struct Impact<'a> {
    /// Point of intersection
    pub point: Point3D,
    /// Distance from the vector origin to `point`, always >= 0
    pub distance: f64,
    /// The shape that was hit
    pub shape: &'a dyn Shape,
    /// The vector that produced this impact
    pub vector: Vector3D,
}

impl<'a> Impact<'a> {
    pub fn new(point: Point3D, distance: f64, shape: &'a dyn Shape, vector: Vector3D) -> Self {
        Self {
            point,
            distance,
            shape,
            vector,
        }
    }

    #[inline]
    pub fn distance_squared(&self) -> f64 {
        self.distance * self.distance
    }

    /// True if this impact is on `shape` itself (reference identity, not
    /// geometric equality).
    #[inline]
    pub fn is_on(&self, shape: &dyn Shape) -> bool {
        std::ptr::addr_eq(self.shape, shape)
    }

    /// Keep whichever impact is nearer. On a tie the current impact wins.
    fn nearer(current: Option<Self>, candidate: Option<Self>) -> Option<Self> {
        match (current, candidate) {
            (Some(a), Some(b)) => Some(if b.distance < a.distance { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

impl fmt::Debug for Impact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Impact")
            .field("point", &self.point)
            .field("distance", &self.distance)
            .field("shape", &self.shape)
            .field("vector", &self.vector)
            .finish()
    }
}

/// Trait for objects that can be hit by vectors and shaded.
pub trait Shape: fmt::Debug + Send + Sync {
    /// Nearest intersection in front of the vector origin, if any.
    ///
    /// The vector's direction must not be zero.
    fn is_hit(&self, vector: &Vector3D) -> Option<Impact<'_>>;

    /// Outward surface normal at a point on the shape.
    fn normal_at(&self, point: Point3D) -> Vector3D;

    /// A representative center, for shapes that have one.
    fn center(&self) -> Option<Point3D>;

    /// Material of the shape.
    fn surface(&self) -> &Surface;

    /// The light behind this shape, if it is one.
    fn as_light(&self) -> Option<&Light> {
        None
    }
}

/// The shapes of a scene, with the lights among them indexed.
#[derive(Debug, Default)]
pub struct ShapeList {
    shapes: Vec<Box<dyn Shape>>,
    lights: Vec<usize>,
}

impl ShapeList {
    /// Create a new empty shape list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape to the list, indexing it if it is a light.
    pub fn add(&mut self, shape: Box<dyn Shape>) {
        if shape.as_light().is_some() {
            self.lights.push(self.shapes.len());
        }
        self.shapes.push(shape);
    }

    /// Get the number of shapes, lights included.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Iterate over every shape.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> + '_ {
        self.shapes.iter().map(|shape| shape.as_ref())
    }

    /// Iterate over the lights.
    pub fn lights(&self) -> impl Iterator<Item = &Light> + '_ {
        self.lights
            .iter()
            .filter_map(move |&ix| self.shapes[ix].as_light())
    }

    /// Nearest impact of `vector` over all shapes, by linear scan.
    pub fn nearest_impact(&self, vector: &Vector3D) -> Option<Impact<'_>> {
        self.iter()
            .map(|shape| shape.is_hit(vector))
            .fold(None, Impact::nearer)
    }
}

impl FromIterator<Box<dyn Shape>> for ShapeList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Shape>>>(iter: I) -> Self {
        let mut list = ShapeList::new();
        for shape in iter {
            list.add(shape);
        }
        list
    }
}
