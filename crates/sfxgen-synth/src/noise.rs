//! Buffered white noise for the noise oscillator.
//!
//! The buffer holds 32 values spread across one oscillator cycle and is
//! refilled once per cycle. Its PCG32 is seeded from the record's
//! `random_seed`, so the same record always produces the same noise.

use std::ops::Index;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::rng::create_rng;

/// Number of noise values per oscillator cycle.
pub const NOISE_LENGTH: usize = 32;

/// Fixed-size noise table with its own generator.
#[derive(Debug, Clone)]
pub struct NoiseBuffer {
    values: [f64; NOISE_LENGTH],
    rng: Pcg32,
}

impl NoiseBuffer {
    /// Creates a filled buffer from a seed.
    pub fn new(seed: u32) -> Self {
        let mut noise = Self {
            values: [0.0; NOISE_LENGTH],
            rng: create_rng(seed),
        };
        noise.generate();
        noise
    }

    /// Refills every slot with uniform values in `[-1, 1]`.
    pub fn generate(&mut self) {
        for value in self.values.iter_mut() {
            *value = self.rng.gen_range(-1.0..=1.0);
        }
    }

    /// Reads the slot covering `phase` within a cycle of `period` samples.
    pub fn at_phase(&self, phase: usize, period: usize) -> f64 {
        let index = phase * NOISE_LENGTH / period.max(1);
        self.values[index.min(NOISE_LENGTH - 1)]
    }
}

impl Index<usize> for NoiseBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
