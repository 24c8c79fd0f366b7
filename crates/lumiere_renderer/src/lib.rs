//! Lumiere renderer - CPU Phong ray tracing
//!
//! Casts one or more view rays per pixel from an observer through a screen
//! plane, finds the nearest shape and shades it with ambient, diffuse and
//! specular terms. Lights are ordinary shapes that also illuminate, and
//! every light is shadow-tested against the rest of the scene.
//!
//! Pixels are rendered in parallel, bucket by bucket, with rayon.

mod bucket;
mod color;
mod config;
mod error;
mod light;
mod plane;
mod raster;
mod ray;
mod scene;
mod screen;
mod shading;
mod shape;
mod sphere;
mod surface;

pub use bucket::{generate_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use color::{Color, Rgb};
pub use config::{RenderConfig, MAX_SAMPLES_PER_AXIS};
pub use error::{RenderError, RenderResult};
pub use light::{Attenuation, Light};
pub use plane::Plane;
pub use raster::Raster;
pub use ray::Ray;
pub use scene::Scene;
pub use screen::Screen;
pub use shading::{compute_color, MAX_AMBIENT_LIGHT_INTENSITY, MAX_DIFFUSE_LIGHT_INTENSITY};
pub use shape::{Impact, Shape, ShapeList};
pub use sphere::Sphere;
pub use surface::Surface;

/// Re-export the geometry types from lumiere_math
pub use lumiere_math::{Interval, MathError, Point3D, Vector3D};
