//! Screen plane and per-pixel ray generation.
//!
//! ```text
//!   Z
//!   |        screen (x = origin.x)
//!   |   origin +------> +Y (columns)
//!   |          |
//!   |          v -Z (rows)
//!   |
//!   +------------------- Y
//!  /
//! X   observer looks through the screen
//! ```

use lumiere_math::Point3D;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{check_point, RenderError, RenderResult};
use crate::{Ray, RenderConfig};

/// The observer and the physical screen rays are cast through.
#[derive(Debug, Clone)]
pub struct Screen {
    observer: Point3D,
    origin: Point3D,
    width: f64,
    height: f64,
    pixel_count_x: u32,
    pixel_count_y: u32,

    // Cached pixel size in world units
    pixel_width: f64,
    pixel_height: f64,
}

impl Screen {
    /// Create a new screen.
    ///
    /// `origin` is the top-left corner of the screen. Columns advance along
    /// +Y by `width / pixel_count_x`, rows along -Z by
    /// `height / pixel_count_y`.
    pub fn new(
        observer: Point3D,
        origin: Point3D,
        width: f64,
        height: f64,
        pixel_count_x: u32,
        pixel_count_y: u32,
    ) -> RenderResult<Self> {
        let observer = check_point("observer", observer)?;
        let origin = check_point("screen origin", origin)?;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(RenderError::InvalidScreenSize { width, height });
        }
        if pixel_count_x == 0 || pixel_count_y == 0 {
            return Err(RenderError::InvalidPixelCount {
                x: pixel_count_x,
                y: pixel_count_y,
            });
        }

        Ok(Self {
            observer,
            origin,
            width,
            height,
            pixel_count_x,
            pixel_count_y,
            pixel_width: width / pixel_count_x as f64,
            pixel_height: height / pixel_count_y as f64,
        })
    }

    pub fn observer(&self) -> Point3D {
        self.observer
    }

    /// Physical screen size (width, height).
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Number of pixel columns.
    pub fn pixel_count_x(&self) -> u32 {
        self.pixel_count_x
    }

    /// Number of pixel rows.
    pub fn pixel_count_y(&self) -> u32 {
        self.pixel_count_y
    }

    /// Point on the screen at fractional offset (`dx`, `dy`) inside pixel
    /// (`row`, `column`). Offsets are in [0, 1).
    pub fn sample_point(&self, row: u32, column: u32, dx: f64, dy: f64) -> Point3D {
        Point3D::new(
            self.origin.x(),
            self.origin.y() + (column as f64 + dx) * self.pixel_width,
            self.origin.z() - (row as f64 + dy) * self.pixel_height,
        )
    }

    /// All sample rays for one pixel, `samples_per_axis^2` of them.
    ///
    /// Samples sit at the center of each sub-pixel cell, or at a random
    /// position inside it when jitter is on. Jitter is seeded per pixel so a
    /// render does not depend on thread scheduling.
    pub fn pixel_rays(&self, row: u32, column: u32, config: &RenderConfig) -> Vec<Ray> {
        let n = config.samples_per_axis;
        let step = 1.0 / n as f64;
        let mut rng = config.jitter.then(|| self.pixel_rng(row, column, config.seed));

        let mut rays = Vec::with_capacity(config.samples_per_pixel() as usize);
        for sy in 0..n {
            for sx in 0..n {
                let (ux, uy) = match rng.as_mut() {
                    Some(rng) => (rng.gen::<f64>(), rng.gen::<f64>()),
                    None => (0.5, 0.5),
                };
                let target = self.sample_point(
                    row,
                    column,
                    (sx as f64 + ux) * step,
                    (sy as f64 + uy) * step,
                );
                rays.push(Ray::view(row, column, self.observer, target - self.observer));
            }
        }
        rays
    }

    fn pixel_rng(&self, row: u32, column: u32, seed: u64) -> StdRng {
        let index = row as u64 * self.pixel_count_x as u64 + column as u64;
        StdRng::seed_from_u64(seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}
