//! Random sound generation.
//!
//! A [`SoundGenerator`] owns one [`RandomSource`] and draws parameter records
//! from it: one of seven archetype distributions, a fully random record, or a
//! small mutation of an existing record. Records are always returned
//! sanitized.
//!
//! ```
//! use sfxgen_synth::{create_sound, SoundGenerator, SoundKind};
//!
//! let mut generator = SoundGenerator::new(42);
//! let wave = generator.generate(SoundKind::PickupCoin);
//! let sound = create_sound(&wave);
//! assert!(!sound.buffer().samples().is_empty());
//! ```

mod archetypes;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use sfxgen_spec::{Param, SoundWave, WaveType, DEFAULT_SAMPLE_RATE};

use crate::render::render;
use crate::rng::{RandomSource, SfxRng};
use crate::sound::Sound;

/// Largest nudge applied to a field by [`SoundGenerator::mutate_wave`].
pub const MUTATION_STEP: f64 = 0.05;

/// Sound archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundKind {
    /// Bright rising chime.
    PickupCoin,
    /// Falling zap.
    LaserShoot,
    /// Noise burst.
    Explosion,
    /// Rising sweep, often repeated.
    Powerup,
    /// Short falling thud.
    HitHurt,
    /// Quick upward glide.
    Jump,
    /// Short menu blip.
    BlipSelect,
}

impl SoundKind {
    /// Every archetype.
    pub const ALL: [SoundKind; 7] = [
        SoundKind::PickupCoin,
        SoundKind::LaserShoot,
        SoundKind::Explosion,
        SoundKind::Powerup,
        SoundKind::HitHurt,
        SoundKind::Jump,
        SoundKind::BlipSelect,
    ];

    /// Snake-case name, as serialized.
    pub fn name(self) -> &'static str {
        match self {
            SoundKind::PickupCoin => "pickup_coin",
            SoundKind::LaserShoot => "laser_shoot",
            SoundKind::Explosion => "explosion",
            SoundKind::Powerup => "powerup",
            SoundKind::HitHurt => "hit_hurt",
            SoundKind::Jump => "jump",
            SoundKind::BlipSelect => "blip_select",
        }
    }
}

/// Renders a record and wraps the result as a playable sound.
pub fn create_sound(wave: &SoundWave) -> Sound {
    let rendered = render(wave);
    log::debug!(
        "rendered {} samples at {} Hz ({:?})",
        rendered.samples.len(),
        rendered.sample_rate,
        rendered.stop_reason
    );
    Sound::new(rendered.into_buffer())
}

/// Draws sound parameter records from a random source.
#[derive(Debug, Clone)]
pub struct SoundGenerator<R: RandomSource = SfxRng> {
    source: R,
    sample_rate: u32,
}

impl SoundGenerator<SfxRng> {
    /// Creates a generator backed by a PCG32 source.
    pub fn new(seed: u32) -> Self {
        Self::with_source(SfxRng::new(seed))
    }
}

impl<R: RandomSource> SoundGenerator<R> {
    /// Creates a generator over any random source.
    pub fn with_source(source: R) -> Self {
        Self {
            source,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Sets the sample rate written into generated records.
    ///
    /// The rate is sanitized along with the rest of each record.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// The random source.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Consumes the generator, returning its random source.
    pub fn into_source(self) -> R {
        self.source
    }

    /// Draws a record from the given archetype.
    pub fn generate(&mut self, kind: SoundKind) -> SoundWave {
        match kind {
            SoundKind::PickupCoin => self.generate_pickup_coin(),
            SoundKind::LaserShoot => self.generate_laser_shoot(),
            SoundKind::Explosion => self.generate_explosion(),
            SoundKind::Powerup => self.generate_powerup(),
            SoundKind::HitHurt => self.generate_hit_hurt(),
            SoundKind::Jump => self.generate_jump(),
            SoundKind::BlipSelect => self.generate_blip_select(),
        }
    }

    /// Draws every field from broad, mostly power-shaped distributions.
    ///
    /// Notes whose attack, sustain and decay sum below 0.2 get extra sustain
    /// and decay so the result is audible.
    pub fn generate_random(&mut self) -> SoundWave {
        let mut wave = self.base_wave();

        wave.wave_type = WaveType::from_index(self.rnd(4)).unwrap_or_default();

        wave.start_frequency = self.signed_pow(2);
        if self.flip() {
            wave.start_frequency = self.signed_pow(3) + 0.5;
        }
        wave.min_frequency = 0.0;
        wave.slide = self.signed_pow(5);
        if wave.start_frequency > 0.7 && wave.slide > 0.2 {
            wave.slide = -wave.slide;
        }
        if wave.start_frequency < 0.2 && wave.slide < -0.05 {
            wave.slide = -wave.slide;
        }
        wave.delta_slide = self.signed_pow(3);

        wave.square_duty = self.signed();
        wave.duty_sweep = self.signed_pow(3);

        wave.vibrato_depth = self.signed_pow(3);
        wave.vibrato_speed = self.signed();

        wave.attack_time = self.signed_pow(3);
        wave.sustain_time = self.signed_pow(2);
        wave.decay_time = self.signed();
        wave.sustain_punch = self.frnd(0.8).powi(2);

        wave.lpf_resonance = self.signed();
        wave.lpf_cutoff = 1.0 - self.frnd(1.0).powi(3);
        wave.lpf_cutoff_sweep = self.signed_pow(3);
        if wave.lpf_cutoff < 0.1 && wave.lpf_cutoff_sweep < -0.05 {
            wave.lpf_cutoff_sweep = -wave.lpf_cutoff_sweep;
        }
        wave.hpf_cutoff = self.frnd(1.0).powi(5);
        wave.hpf_cutoff_sweep = self.signed_pow(5);

        wave.phaser_offset = self.signed_pow(3);
        wave.phaser_sweep = self.signed_pow(3);

        wave.repeat_speed = self.signed();
        wave.change_speed = self.signed();
        wave.change_amount = self.signed();

        wave.sanitize();
        if wave.attack_time + wave.sustain_time + wave.decay_time < 0.2 {
            wave.sustain_time += 0.2 + self.frnd(0.3);
            wave.decay_time += 0.2 + self.frnd(0.3);
        }

        self.finish("random", wave)
    }

    /// Returns a copy of `wave` with about half of its shape fields nudged.
    ///
    /// Each field independently has a one-in-two chance of moving by up to
    /// [`MUTATION_STEP`] in either direction. The result is sanitized; the
    /// waveform, seed and sample rate are kept.
    pub fn mutate_wave(&mut self, wave: &SoundWave) -> SoundWave {
        let mut mutated = wave.clone();
        for param in Param::ALL {
            if self.flip() {
                *mutated.get_mut(param) += self.source.uniform_f64(-MUTATION_STEP, MUTATION_STEP);
            }
        }
        mutated.sanitize();
        mutated
    }

    // ========================================================================
    // Draw helpers
    // ========================================================================

    /// Default record stamped with the current seed word and sample rate.
    fn base_wave(&self) -> SoundWave {
        SoundWave {
            random_seed: self.source.seed_word(),
            sample_rate: self.sample_rate,
            ..SoundWave::default()
        }
    }

    fn finish(&self, kind: &str, mut wave: SoundWave) -> SoundWave {
        wave.sanitize();
        log::trace!("generated {} sound (seed {:#010x})", kind, wave.random_seed);
        wave
    }

    /// Uniform in `[0, range]`.
    fn frnd(&mut self, range: f64) -> f64 {
        self.source.uniform_f64(0.0, range)
    }

    /// Uniform integer in `[0, n]`.
    fn rnd(&mut self, n: u32) -> u32 {
        self.source.uniform_u32(0, n)
    }

    fn flip(&mut self) -> bool {
        self.source.coin()
    }

    /// Uniform in `[-1, 1]`.
    fn signed(&mut self) -> f64 {
        self.frnd(2.0) - 1.0
    }

    /// Uniform in `[-1, 1]` raised to an integer power.
    fn signed_pow(&mut self, exponent: i32) -> f64 {
        self.signed().powi(exponent)
    }
}
