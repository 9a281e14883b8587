//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the synthesizer flows through this module. The
//! generator draws parameter values from a [`RandomSource`]; the noise
//! oscillator owns a private PCG32 seeded from the record's `random_seed`.
//! There is no global random state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed from a base seed and a stream position.
///
/// Uses BLAKE3 over the little-endian bytes of both values and keeps the
/// first four bytes of the hash.
pub fn derive_stream_seed(base_seed: u32, position: u64) -> u32 {
    let mut input = Vec::with_capacity(12);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&position.to_le_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Uniform random source used by the sound generator.
pub trait RandomSource {
    /// Uniform value in `[min, max]`.
    fn uniform_f64(&mut self, min: f64, max: f64) -> f64;

    /// Uniform integer in `[min, max]`.
    fn uniform_u32(&mut self, min: u32, max: u32) -> u32;

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.uniform_u32(0, 1) == 1
    }

    /// Reproducible word describing the current state of the source.
    ///
    /// Two sources built from the same seed and advanced by the same draws
    /// report the same word.
    fn seed_word(&self) -> u32;
}

/// PCG32-backed [`RandomSource`].
#[derive(Debug, Clone)]
pub struct SfxRng {
    base_seed: u32,
    draws: u64,
    rng: Pcg32,
}

impl SfxRng {
    /// Creates a source from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self {
            base_seed: seed,
            draws: 0,
            rng: create_rng(seed),
        }
    }

    /// Seed the source was created with.
    pub fn base_seed(&self) -> u32 {
        self.base_seed
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RandomSource for SfxRng {
    fn uniform_f64(&mut self, min: f64, max: f64) -> f64 {
        self.draws += 1;
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn uniform_u32(&mut self, min: u32, max: u32) -> u32 {
        self.draws += 1;
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn seed_word(&self) -> u32 {
        derive_stream_seed(self.base_seed, self.draws)
    }
}
