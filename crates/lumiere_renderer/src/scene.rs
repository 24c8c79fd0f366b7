//! Scene and parallel render driver.

use std::time::Instant;

use lumiere_math::Point3D;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::error::RenderResult;
use crate::shading::compute_color;
use crate::{Raster, RenderConfig, Rgb, Screen, Shape, ShapeList};

/// A static scene: shapes (lights included) seen from an observer through a
/// screen.
///
/// Immutable once built; rendering only borrows it, so worker threads share
/// it without synchronization.
#[derive(Debug)]
pub struct Scene {
    screen: Screen,
    shapes: ShapeList,
}

impl Scene {
    /// Build a scene.
    ///
    /// `screen_size` is the physical (width, height) of the screen, spanned by
    /// `pixel_count_x` columns and `pixel_count_y` rows. Fails without
    /// building anything if a dimension is not positive or a point is not
    /// finite.
    pub fn new(
        observer: Point3D,
        screen_origin: Point3D,
        screen_size: (f64, f64),
        pixel_count_x: u32,
        pixel_count_y: u32,
        shapes: Vec<Box<dyn Shape>>,
    ) -> RenderResult<Self> {
        let (width, height) = screen_size;
        let screen = Screen::new(
            observer,
            screen_origin,
            width,
            height,
            pixel_count_x,
            pixel_count_y,
        )?;
        let shapes: ShapeList = shapes.into_iter().collect();

        log::debug!(
            "Scene built: {} shapes, {} lights, {}x{} pixels",
            shapes.len(),
            shapes.light_count(),
            pixel_count_x,
            pixel_count_y
        );

        Ok(Self { screen, shapes })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    /// Render with the default configuration: one ray per pixel through its
    /// center, black background.
    pub fn render(&self) -> Raster {
        self.render_buckets(&RenderConfig::default())
    }

    /// Render with an explicit configuration.
    ///
    /// The configuration is checked before any pixel is computed.
    pub fn render_with(&self, config: &RenderConfig) -> RenderResult<Raster> {
        config.validate()?;
        Ok(self.render_buckets(config))
    }

    fn render_buckets(&self, config: &RenderConfig) -> Raster {
        let width = self.screen.pixel_count_x();
        let height = self.screen.pixel_count_y();
        log::info!(
            "Rendering {}x{} @ {} spp",
            width,
            height,
            config.samples_per_pixel()
        );
        let start = Instant::now();

        let results: Vec<BucketResult> = generate_buckets(width, height, config.bucket_size)
            .into_par_iter()
            .map(|bucket| BucketResult::new(bucket, render_bucket(&bucket, self, config)))
            .collect();

        let mut raster = Raster::new(width, height);
        for result in &results {
            raster.write_bucket(result);
        }

        log::info!("Rendered {} buckets in {:?}", results.len(), start.elapsed());
        raster
    }
}

/// Render one pixel: shade every sample ray and average the 8-bit channels.
///
/// `config` must have passed [`RenderConfig::validate`].
pub(crate) fn render_pixel(
    scene: &Scene,
    row: u32,
    column: u32,
    config: &RenderConfig,
) -> Rgb {
    let rays = scene.screen.pixel_rays(row, column, config);
    let count = rays.len() as u32;

    let (r, g, b) = rays
        .iter()
        .map(|ray| compute_color(ray.vector(), &scene.shapes, config.background))
        .fold((0u32, 0u32, 0u32), |(r, g, b), c| {
            (r + c.r as u32, g + c.g as u32, b + c.b as u32)
        });

    Rgb::new((r / count) as u8, (g / count) as u8, (b / count) as u8)
}
