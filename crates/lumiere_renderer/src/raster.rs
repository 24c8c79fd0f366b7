//! Output raster of packed RGB pixels.

use crate::{BucketResult, Rgb};

/// A row-major image of 8-bit RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Create a new raster filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width * height) as usize],
        }
    }

    /// Get the pixel at (`row`, `column`).
    pub fn get(&self, row: u32, column: u32) -> Rgb {
        self.pixels[self.index(row, column)]
    }

    /// Get the pixel at (`row`, `column`) packed as `0xRRGGBB`.
    pub fn packed(&self, row: u32, column: u32) -> u32 {
        self.get(row, column).packed()
    }

    /// Set the pixel at (`row`, `column`).
    pub fn set(&mut self, row: u32, column: u32, color: Rgb) {
        let index = self.index(row, column);
        self.pixels[index] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixels as tightly packed RGB8 bytes, row-major (for encoders).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (local_y, row) in result.pixels.chunks(bucket.width as usize).enumerate() {
            let start = self.index(bucket.y + local_y as u32, bucket.x);
            self.pixels[start..start + row.len()].copy_from_slice(row);
        }
    }

    #[inline]
    fn index(&self, row: u32, column: u32) -> usize {
        debug_assert!(row < self.height && column < self.width);
        (row * self.width + column) as usize
    }
}
