//! Sinusoidal period modulation.

use sfxgen_spec::SoundWave;

/// Vibrato with a continuously accumulating phase.
#[derive(Debug, Clone)]
pub struct Vibrato {
    phase: f64,
    speed: f64,
    depth: f64,
}

impl Vibrato {
    /// Creates a vibrato from `vibrato_speed` and `vibrato_depth`.
    pub fn new(wave: &SoundWave) -> Self {
        Self {
            phase: 0.0,
            speed: wave.vibrato_speed * wave.vibrato_speed * 0.01,
            depth: wave.vibrato_depth * 0.5,
        }
    }

    /// Advances the phase and returns the modulated period.
    ///
    /// The phase is never reset, including across repeats.
    pub fn apply(&mut self, period: f64) -> f64 {
        self.phase += self.speed;
        if self.depth > 0.0 {
            period * (1.0 + self.phase.sin() * self.depth)
        } else {
            period
        }
    }

    /// Accumulated phase in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}
