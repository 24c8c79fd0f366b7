//! Surface materials for Phong shading.

use serde::{Deserialize, Serialize};

use crate::error::{check_coefficient, RenderError, RenderResult};
use crate::Rgb;

/// How a shape reflects light.
///
/// Coefficients are non-negative. There is no upper bound; the shading
/// engine clamps the composite intensity instead. Deserializing goes through
/// [`Surface::new`], so the same checks apply to JSON input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SurfaceParams")]
pub struct Surface {
    color: Rgb,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    specular_exponent: f64,
}

/// Unchecked serialized form of [`Surface`].
#[derive(Deserialize)]
struct SurfaceParams {
    color: Rgb,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    specular_exponent: f64,
}

impl TryFrom<SurfaceParams> for Surface {
    type Error = RenderError;

    fn try_from(p: SurfaceParams) -> RenderResult<Self> {
        Surface::new(p.color, p.ambient, p.diffuse, p.specular, p.specular_exponent)
    }
}

impl Surface {
    /// Create a new surface, rejecting negative or NaN coefficients.
    pub fn new(
        color: Rgb,
        ambient: f64,
        diffuse: f64,
        specular: f64,
        specular_exponent: f64,
    ) -> RenderResult<Self> {
        Ok(Self {
            color,
            ambient: check_coefficient("ambient", ambient)?,
            diffuse: check_coefficient("diffuse", diffuse)?,
            specular: check_coefficient("specular", specular)?,
            specular_exponent: check_coefficient("specular exponent", specular_exponent)?,
        })
    }

    /// A surface that only carries a color. Used for lights, which render
    /// flat and never reflect.
    pub fn emissive(color: Rgb) -> Self {
        Self {
            color,
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.0,
            specular_exponent: 0.0,
        }
    }

    /// Base color of the surface, or the emitted color of a light.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Ambient reflection coefficient.
    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    /// Diffuse reflection coefficient.
    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    /// Specular reflection coefficient.
    pub fn specular(&self) -> f64 {
        self.specular
    }

    /// Specular exponent (shininess).
    pub fn specular_exponent(&self) -> f64 {
        self.specular_exponent
    }
}

impl Default for Surface {
    /// Dark gray, fully ambient, half diffuse, with a soft highlight.
    fn default() -> Self {
        Self {
            color: Rgb::new(64, 64, 64),
            ambient: 1.0,
            diffuse: 0.5,
            specular: 0.2,
            specular_exponent: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderError;

    #[test]
    fn test_surface_new() {
        let surface = Surface::new(Rgb::new(10, 20, 30), 0.5, 0.8, 0.3, 12.0).unwrap();
        assert_eq!(surface.color(), Rgb::new(10, 20, 30));
        assert_eq!(surface.ambient(), 0.5);
        assert_eq!(surface.diffuse(), 0.8);
        assert_eq!(surface.specular(), 0.3);
        assert_eq!(surface.specular_exponent(), 12.0);
    }

    #[test]
    fn test_surface_rejects_negative() {
        let err = Surface::new(Rgb::WHITE, 1.0, -0.1, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidCoefficient {
                name: "diffuse",
                value: -0.1
            }
        );
        assert!(Surface::new(Rgb::WHITE, f64::NAN, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_json_goes_through_validation() {
        let surface: Surface = serde_json::from_str(
            r#"{ "color": { "r": 1, "g": 2, "b": 3 }, "ambient": 0.5,
                 "diffuse": 0.8, "specular": 0.3, "specular_exponent": 12.0 }"#,
        )
        .unwrap();
        assert_eq!(surface, Surface::new(Rgb::new(1, 2, 3), 0.5, 0.8, 0.3, 12.0).unwrap());

        let negative = serde_json::from_str::<Surface>(
            r#"{ "color": { "r": 1, "g": 2, "b": 3 }, "ambient": 0.5,
                 "diffuse": -0.8, "specular": 0.3, "specular_exponent": 12.0 }"#,
        );
        let err = negative.unwrap_err().to_string();
        assert!(err.contains("diffuse"), "{err}");
    }

    #[test]
    fn test_json_round_trip() {
        let surface = Surface::default();
        let json = serde_json::to_string(&surface).unwrap();
        assert_eq!(serde_json::from_str::<Surface>(&json).unwrap(), surface);
    }

    #[test]
    fn test_coefficients_above_one_are_allowed() {
        assert!(Surface::new(Rgb::WHITE, 3.0, 2.0, 5.0, 200.0).is_ok());
    }
}
