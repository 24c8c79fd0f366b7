//! Phong shading engine.
//!
//! Computes the color seen along a view vector: nearest impact, then an
//! ambient term plus, for every unoccluded light, a diffuse and a specular
//! term. Lights hit directly render as their own flat color.

use lumiere_math::Vector3D;

use crate::shape::{Impact, Shape, ShapeList};
use crate::{Color, Light, Rgb};

/// Share of the surface color lit by ambient light.
pub const MAX_AMBIENT_LIGHT_INTENSITY: f64 = 0.3;
/// Share of the surface color lit by a fully facing light.
pub const MAX_DIFFUSE_LIGHT_INTENSITY: f64 = 1.0 - MAX_AMBIENT_LIGHT_INTENSITY;

/// Light reflected toward the viewer by one light.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LightContribution {
    diffuse: Color,
    specular: Color,
}

/// Compute the color seen along `vector`.
///
/// `background` is returned when nothing is hit.
pub fn compute_color(vector: &Vector3D, shapes: &ShapeList, background: Rgb) -> Rgb {
    let Some(impact) = shapes.nearest_impact(vector) else {
        return background;
    };

    // Lights are emitters: flat color, no shading.
    if let Some(light) = impact.shape.as_light() {
        return light.color();
    }

    Rgb::from_color(phong(&impact, shapes))
}

/// Unclamped ambient + diffuse + specular intensity at an impact.
fn phong(impact: &Impact<'_>, shapes: &ShapeList) -> Color {
    let surface = impact.shape.surface();
    let base = surface.color().to_color();
    let normal = impact.shape.normal_at(impact.point).normalize();

    let ambient = base * (MAX_AMBIENT_LIGHT_INTENSITY * surface.ambient());

    let (diffuse, specular) = shapes
        .lights()
        .filter_map(|light| light_contribution(impact, &normal, light, shapes))
        .fold((Color::ZERO, Color::ZERO), |(diffuse, specular), c| {
            (diffuse + c.diffuse, specular + c.specular)
        });

    ambient + diffuse + specular
}

/// Diffuse and specular light from `light` at an impact, or `None` when
/// another shape shadows it.
///
/// `normal` must be unit length.
fn light_contribution(
    impact: &Impact<'_>,
    normal: &Vector3D,
    light: &Light,
    shapes: &ShapeList,
) -> Option<LightContribution> {
    let center = light.position();
    let probe = Vector3D::new(center, impact.point - center, true).normalize();

    if is_occluded(&probe, center.distance_squared(&impact.point), light, impact, shapes) {
        return None;
    }

    let surface = impact.shape.surface();
    let base = surface.color().to_color();

    // Falloff uses the light-to-surface distance plus the distance the view
    // vector travelled to reach the surface.
    let distance = center.distance(&impact.point) + impact.distance;
    let attenuation = light.attenuation().factor(distance);

    let theta = -normal.dot(&probe);
    let diffuse = if theta < 0.0 {
        Color::ZERO
    } else {
        base * (MAX_DIFFUSE_LIGHT_INTENSITY * surface.diffuse() * theta * attenuation)
    };

    // Reflect the view direction about the normal.
    let view = impact.vector.normalize().direction;
    let n = normal.direction;
    let reflected = view - n * (2.0 * view.dot(&n));
    let alignment = reflected.normalize().dot(&probe.negate().normalize().direction);
    let specular = if alignment > 0.0 {
        light.color().to_color()
            * (attenuation * surface.specular() * alignment.powf(surface.specular_exponent()))
    } else {
        Color::ZERO
    };

    Some(LightContribution { diffuse, specular })
}

/// True if a shape other than `light` and the shaded one is hit by `probe`
/// closer to the light than the impact point.
fn is_occluded(
    probe: &Vector3D,
    distance_squared: f64,
    light: &Light,
    impact: &Impact<'_>,
    shapes: &ShapeList,
) -> bool {
    shapes
        .iter()
        .filter(|&shape| !std::ptr::addr_eq(shape, light) && !impact.is_on(shape))
        .any(|shape| {
            shape
                .is_hit(probe)
                .is_some_and(|hit| hit.distance_squared() < distance_squared)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attenuation, Plane, Sphere, Surface};
    use lumiere_math::Point3D;

    fn floor(surface: Surface) -> Box<dyn Shape> {
        Box::new(Plane::new(Point3D::ORIGIN, Point3D::new(0.0, 0.0, 1.0), surface).unwrap())
    }

    fn light_at(center: Point3D, color: Rgb) -> Box<dyn Shape> {
        Box::new(Light::new(center, 0.5, color, Attenuation::default()).unwrap())
    }

    /// Looks down at the origin of the floor from (3, 0, 3).
    fn view() -> Vector3D {
        Vector3D::new(Point3D::new(3.0, 0.0, 3.0), Point3D::new(-1.0, 0.0, -1.0), false)
    }

    fn gray() -> Surface {
        Surface::new(Rgb::new(128, 128, 128), 1.0, 1.0, 0.5, 10.0).unwrap()
    }

    fn contribution(shapes: &ShapeList) -> Option<LightContribution> {
        let impact = shapes.nearest_impact(&view()).unwrap();
        let normal = impact.shape.normal_at(impact.point).normalize();
        let light = shapes.lights().next().unwrap();
        light_contribution(&impact, &normal, light, shapes)
    }

    #[test]
    fn test_miss_returns_background() {
        let shapes: ShapeList = vec![floor(gray())].into_iter().collect();
        let up = Vector3D::new(Point3D::new(0.0, 0.0, 1.0), Point3D::new(0.0, 0.0, 1.0), false);

        assert_eq!(compute_color(&up, &shapes, Rgb::BLACK), Rgb::BLACK);
        assert_eq!(compute_color(&up, &ShapeList::new(), Rgb::WHITE), Rgb::WHITE);
    }

    #[test]
    fn test_ambient_only_without_lights() {
        let surface = Surface::new(Rgb::new(200, 100, 50), 1.0, 1.0, 1.0, 5.0).unwrap();
        let shapes: ShapeList = vec![floor(surface)].into_iter().collect();

        let expected = Rgb::from_color(
            surface.color().to_color() * (MAX_AMBIENT_LIGHT_INTENSITY * surface.ambient()),
        );
        assert_eq!(compute_color(&view(), &shapes, Rgb::BLACK), expected);
        assert_eq!(expected, Rgb::new(60, 30, 15));
    }

    #[test]
    fn test_unoccluded_light_adds_diffuse() {
        let shapes: ShapeList = vec![
            floor(gray()),
            light_at(Point3D::new(0.0, 0.0, 4.0), Rgb::WHITE),
        ]
        .into_iter()
        .collect();

        let c = contribution(&shapes).unwrap();
        assert!(c.diffuse.x > 0.0);
        // Light straight above: theta = 1, no falloff.
        let expected = 128.0 / 255.0 * MAX_DIFFUSE_LIGHT_INTENSITY;
        assert!((c.diffuse.x - expected).abs() < 1e-12);
        assert!(c.specular.x > 0.0);
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let blocker: Box<dyn Shape> =
            Box::new(Sphere::new(Point3D::new(0.0, 0.0, 2.0), 0.5, gray()).unwrap());
        let shapes: ShapeList = vec![
            floor(gray()),
            blocker,
            light_at(Point3D::new(0.0, 0.0, 4.0), Rgb::WHITE),
        ]
        .into_iter()
        .collect();

        assert_eq!(contribution(&shapes), None);

        // The pixel falls back to ambient only.
        let ambient_only = Rgb::from_color(
            gray().color().to_color() * (MAX_AMBIENT_LIGHT_INTENSITY * gray().ambient()),
        );
        assert_eq!(compute_color(&view(), &shapes, Rgb::BLACK), ambient_only);
    }

    #[test]
    fn test_shape_beyond_the_impact_does_not_shadow() {
        // Below the floor, further from the light than the impact point.
        let below: Box<dyn Shape> =
            Box::new(Sphere::new(Point3D::new(0.0, 0.0, -3.0), 0.5, gray()).unwrap());
        let shapes: ShapeList = vec![
            floor(gray()),
            below,
            light_at(Point3D::new(0.0, 0.0, 4.0), Rgb::WHITE),
        ]
        .into_iter()
        .collect();

        assert!(contribution(&shapes).is_some());
    }

    #[test]
    fn test_light_behind_surface_gives_no_diffuse() {
        let shapes: ShapeList = vec![
            floor(gray()),
            light_at(Point3D::new(0.0, 0.0, -4.0), Rgb::WHITE),
        ]
        .into_iter()
        .collect();

        let c = contribution(&shapes).unwrap();
        assert_eq!(c.diffuse, Color::ZERO);
        assert_eq!(c.specular, Color::ZERO);
    }

    #[test]
    fn test_specular_uses_light_color() {
        let black = Surface::new(Rgb::BLACK, 1.0, 1.0, 1.0, 1.0).unwrap();
        let red = light_at(Point3D::new(0.0, 0.0, 4.0), Rgb::new(255, 0, 0));
        let shapes: ShapeList = vec![floor(black), red].into_iter().collect();

        let color = compute_color(&view(), &shapes, Rgb::BLACK);
        assert!(color.r > 0);
        assert_eq!(color.g, 0);
        assert_eq!(color.b, 0);
    }

    #[test]
    fn test_attenuation_dims_light() {
        let center = Point3D::new(0.0, 0.0, 4.0);
        let near = Light::new(center, 0.5, Rgb::WHITE, Attenuation::default()).unwrap();
        let falloff = Attenuation::new(1.0, 0.1, 0.01).unwrap();
        let far = Light::new(center, 0.5, Rgb::WHITE, falloff).unwrap();

        let bright: ShapeList = vec![floor(gray()), Box::new(near) as Box<dyn Shape>]
            .into_iter()
            .collect();
        let dim: ShapeList = vec![floor(gray()), Box::new(far) as Box<dyn Shape>]
            .into_iter()
            .collect();

        let bright = contribution(&bright).unwrap();
        let dim = contribution(&dim).unwrap();
        assert!(dim.diffuse.x < bright.diffuse.x);
        assert!(dim.diffuse.x > 0.0);
    }

    #[test]
    fn test_hitting_a_light_returns_its_color() {
        let color = Rgb::new(10, 200, 30);
        let backdrop: Box<dyn Shape> = Box::new(
            Plane::new(Point3D::new(0.0, 0.0, 10.0), Point3D::new(0.0, 0.0, -1.0), gray()).unwrap(),
        );
        let shapes: ShapeList = vec![
            backdrop,
            light_at(Point3D::new(0.0, 0.0, 4.0), color),
            light_at(Point3D::new(5.0, 5.0, 5.0), Rgb::WHITE),
        ]
        .into_iter()
        .collect();

        let up = Vector3D::new(Point3D::ORIGIN, Point3D::new(0.0, 0.0, 1.0), false);
        assert_eq!(compute_color(&up, &shapes, Rgb::BLACK), color);
    }

    #[test]
    fn test_composite_is_clamped() {
        let white = Surface::new(Rgb::WHITE, 1.0, 1.0, 0.0, 1.0).unwrap();
        let mut shapes = ShapeList::new();
        shapes.add(floor(white));
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)] {
            shapes.add(light_at(Point3D::new(x, y, 4.0), Rgb::WHITE));
        }

        let impact = shapes.nearest_impact(&view()).unwrap();
        let raw = phong(&impact, &shapes);
        assert!(raw.x > 1.0);

        assert_eq!(compute_color(&view(), &shapes, Rgb::BLACK), Rgb::WHITE);
    }
}
