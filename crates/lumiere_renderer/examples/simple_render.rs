//! Simple Phong ray tracer example.
//!
//! Renders a floor, a back wall, two spheres and two lights, then saves the
//! result as PNG.
//!
//! Usage: `simple_render [config.json] [output.png]`

use anyhow::{Context, Result};
use lumiere_renderer::{
    Attenuation, Light, Plane, Point3D, RenderConfig, Rgb, Scene, Shape, Sphere, Surface,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path))?
        }
        None => RenderConfig::default().with_samples(3).with_jitter(1),
    };
    let output = args.next().unwrap_or_else(|| "output.png".to_string());

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    log::info!("Scene built in {:?}", start.elapsed());

    let raster = scene.render_with(&config)?;

    image::RgbImage::from_raw(raster.width, raster.height, raster.as_bytes().to_vec())
        .context("Raster size does not match its pixel count")?
        .save(&output)
        .with_context(|| format!("Failed to save {}", output))?;
    log::info!("Saved to {}", output);

    Ok(())
}

fn build_scene() -> Result<Scene> {
    let mut shapes: Vec<Box<dyn Shape>> = Vec::new();

    // Floor
    shapes.push(Box::new(Plane::new(
        Point3D::new(0.0, 0.0, -2.0),
        Point3D::new(0.0, 0.0, 1.0),
        Surface::new(Rgb::new(180, 180, 170), 0.6, 0.9, 0.1, 10.0)?,
    )?));

    // Back wall
    shapes.push(Box::new(Plane::new(
        Point3D::new(30.0, 0.0, 0.0),
        Point3D::new(-1.0, 0.0, 0.0),
        Surface::default(),
    )?));

    shapes.push(Box::new(Sphere::new(
        Point3D::new(12.0, -2.5, -0.5),
        1.5,
        Surface::new(Rgb::new(200, 40, 40), 0.5, 0.9, 0.8, 60.0)?,
    )?));

    shapes.push(Box::new(Sphere::new(
        Point3D::new(15.0, 2.5, 0.0),
        2.0,
        Surface::new(Rgb::new(40, 90, 210), 0.5, 0.8, 0.4, 20.0)?,
    )?));

    shapes.push(Box::new(Light::new(
        Point3D::new(8.0, 0.0, 6.0),
        0.3,
        Rgb::new(255, 250, 235),
        Attenuation::new(1.0, 0.02, 0.001)?,
    )?));

    shapes.push(Box::new(Light::new(
        Point3D::new(6.0, -6.0, 2.0),
        0.2,
        Rgb::new(120, 160, 255),
        Attenuation::new(1.0, 0.05, 0.002)?,
    )?));

    log::info!("Created {} shapes", shapes.len());

    // Observer 4 units behind a 16:9 screen.
    let scene = Scene::new(
        Point3D::new(-4.0, 0.0, 0.0),
        Point3D::new(0.0, -1.6, 0.9),
        (3.2, 1.8),
        800,
        450,
        shapes,
    )?;
    Ok(scene)
}
