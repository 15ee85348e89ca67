//! # Sampler
//! Uniform sampling of the workspace from an owned, seedable random source.
use crate::common::Point;
use crate::rrt_error::{RRTError, Result};
use nalgebra::Vector2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

#[derive(Debug, Clone)]
pub struct UniformSampler {
    width: f64,
    height: f64,
    rng: ChaChaRng,
}

impl UniformSampler {
    /// Sampler over `[0, width] x [0, height]` whose sequence is fully determined by `seed`.
    pub fn new(width: f64, height: f64, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, ChaChaRng::seed_from_u64(seed))
    }

    pub fn from_entropy(width: f64, height: f64) -> Result<Self> {
        Self::with_rng(width, height, ChaChaRng::from_entropy())
    }

    pub fn with_rng(width: f64, height: f64, rng: ChaChaRng) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(RRTError::InvalidWorkspace { width, height });
        }
        Ok(Self { width, height, rng })
    }

    pub fn sample(&mut self) -> Point {
        let x = self.rng.gen_range(0.0..=self.width);
        let y = self.rng.gen_range(0.0..=self.height);
        Vector2::new(x, y)
    }
}
