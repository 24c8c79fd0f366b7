//! Color types: linear intensities and packed 8-bit pixels.

use bytemuck::{Pod, Zeroable};
use lumiere_math::{DVec3, Interval};
use serde::{Deserialize, Serialize};

/// Color intensity type alias (RGB values typically 0-1)
pub type Color = DVec3;

/// A color with three 8-bit channels.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    pub const fn packed(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channels scaled to [0, 1].
    pub fn to_color(&self) -> Color {
        Color::new(self.r as f64, self.g as f64, self.b as f64) / 255.0
    }

    /// Convert intensities to 8 bits, clamping each channel to [0, 1] and
    /// rounding half up.
    pub fn from_color(color: Color) -> Self {
        Self {
            r: to_channel(color.x),
            g: to_channel(color.y),
            b: to_channel(color.z),
        }
    }
}

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Rgb::from_packed(packed)
    }
}

impl From<Rgb> for u32 {
    fn from(rgb: Rgb) -> Self {
        rgb.packed()
    }
}

#[inline]
fn to_channel(intensity: f64) -> u8 {
    (Interval::UNIT.clamp(intensity) * 255.0 + 0.5) as u8
}
