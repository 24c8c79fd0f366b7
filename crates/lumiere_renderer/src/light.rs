//! Lights: visible spherical shapes that also illuminate the scene.

use lumiere_math::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

use crate::error::{check_coefficient, RenderError, RenderResult};
use crate::shape::{Impact, Shape};
use crate::{Rgb, Sphere, Surface};

/// Distance falloff of a light: `1 / (constant + linear * d + quadratic * d^2)`.
///
/// Coefficients are non-negative, also when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AttenuationParams")]
pub struct Attenuation {
    constant: f64,
    linear: f64,
    quadratic: f64,
}

#[derive(Deserialize)]
struct AttenuationParams {
    constant: f64,
    linear: f64,
    quadratic: f64,
}

impl TryFrom<AttenuationParams> for Attenuation {
    type Error = RenderError;

    fn try_from(p: AttenuationParams) -> RenderResult<Self> {
        Attenuation::new(p.constant, p.linear, p.quadratic)
    }
}

impl Attenuation {
    /// Create a new attenuation, rejecting negative or NaN coefficients.
    pub fn new(constant: f64, linear: f64, quadratic: f64) -> RenderResult<Self> {
        Ok(Self {
            constant: check_coefficient("constant attenuation", constant)?,
            linear: check_coefficient("linear attenuation", linear)?,
            quadratic: check_coefficient("quadratic attenuation", quadratic)?,
        })
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn linear(&self) -> f64 {
        self.linear
    }

    pub fn quadratic(&self) -> f64 {
        self.quadratic
    }

    /// Intensity factor at distance `d`, capped at 1.
    #[inline]
    pub fn factor(&self, d: f64) -> f64 {
        (1.0 / (self.constant + self.linear * d + self.quadratic * d * d)).min(1.0)
    }
}

impl Default for Attenuation {
    /// No falloff.
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

/// A spherical light.
///
/// Hitting a light renders its color flat. Every light also shines on the
/// other shapes from its center.
#[derive(Debug, Clone)]
pub struct Light {
    body: Sphere,
    attenuation: Attenuation,
}

impl Light {
    /// Create a new light of the given color.
    pub fn new(
        center: Point3D,
        radius: f64,
        color: Rgb,
        attenuation: Attenuation,
    ) -> RenderResult<Self> {
        Ok(Self {
            body: Sphere::new(center, radius, Surface::emissive(color))?,
            attenuation,
        })
    }

    /// The point light is emitted from.
    pub fn position(&self) -> Point3D {
        self.body.position()
    }

    pub fn color(&self) -> Rgb {
        self.body.surface().color()
    }

    pub fn attenuation(&self) -> &Attenuation {
        &self.attenuation
    }
}

impl Shape for Light {
    fn is_hit(&self, vector: &Vector3D) -> Option<Impact<'_>> {
        let t = self.body.hit_distance(vector)?;
        let point = vector.normalize().at(t);
        Some(Impact::new(point, t, self, *vector))
    }

    fn normal_at(&self, point: Point3D) -> Vector3D {
        self.body.normal_at(point)
    }

    fn center(&self) -> Option<Point3D> {
        self.body.center()
    }

    fn surface(&self) -> &Surface {
        self.body.surface()
    }

    fn as_light(&self) -> Option<&Light> {
        Some(self)
    }
}
