//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::{Rgb, DEFAULT_BUCKET_SIZE};

/// Upper bound on `samples_per_axis`. Keeps the per-pixel channel sums
/// (255 per sample) within `u32`.
pub const MAX_SAMPLES_PER_AXIS: u32 = 256;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples along each pixel axis; a pixel gets `samples_per_axis^2` rays
    pub samples_per_axis: u32,
    /// Randomize sample positions within their sub-pixel cell
    pub jitter: bool,
    /// Seed for jittered sampling
    pub seed: u64,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Color of pixels where nothing is hit
    pub background: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_axis: 1,
            jitter: false,
            seed: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
            background: Rgb::BLACK,
        }
    }
}

impl RenderConfig {
    /// Set supersampling to `n` x `n` rays per pixel.
    pub fn with_samples(mut self, samples_per_axis: u32) -> Self {
        self.samples_per_axis = samples_per_axis;
        self
    }

    /// Enable jittered sampling with the given seed.
    pub fn with_jitter(mut self, seed: u64) -> Self {
        self.jitter = true;
        self.seed = seed;
        self
    }

    /// Set bucket size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Rays cast per pixel. Saturates for configurations `validate` rejects.
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_axis.saturating_mul(self.samples_per_axis)
    }

    /// Check the configuration before any pixel is rendered.
    pub fn validate(&self) -> RenderResult<()> {
        if !(1..=MAX_SAMPLES_PER_AXIS).contains(&self.samples_per_axis) {
            return Err(RenderError::InvalidSampleCount(self.samples_per_axis));
        }
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidBucketSize);
        }
        Ok(())
    }
}
