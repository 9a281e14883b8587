//! Resonant one-pole low-pass followed by a one-pole high-pass.
//!
//! Both cutoffs sweep multiplicatively over the note. The low-pass cutoff
//! advances on every sub-sample, the high-pass cutoff once per output sample.

use sfxgen_spec::SoundWave;

/// Upper bound for both filter coefficients.
const MAX_CUTOFF: f64 = 0.1;

/// Lower bound for the high-pass coefficient.
const MIN_HIGHPASS: f64 = 0.00001;

/// Upper bound for the low-pass damping factor.
const MAX_DAMPING: f64 = 0.8;

/// Low-pass then high-pass filter pair.
#[derive(Debug, Clone)]
pub struct SfxFilter {
    bypass_lowpass: bool,
    lp_cutoff: f64,
    lp_sweep: f64,
    lp_damping: f64,
    lp_state: f64,
    lp_velocity: f64,
    hp_cutoff: f64,
    hp_sweep: f64,
    hp_state: f64,
}

impl SfxFilter {
    /// Creates the filter pair from the record's filter parameters.
    pub fn new(wave: &SoundWave) -> Self {
        let lp_cutoff = wave.lpf_cutoff.powi(3) * 0.1;
        let resonance = wave.lpf_resonance * wave.lpf_resonance;
        let lp_damping = (5.0 / (1.0 + resonance * 20.0) * (0.01 + lp_cutoff)).min(MAX_DAMPING);

        Self {
            bypass_lowpass: wave.lpf_cutoff == 1.0,
            lp_cutoff,
            lp_sweep: 1.0 + wave.lpf_cutoff_sweep * 0.0001,
            lp_damping,
            lp_state: 0.0,
            lp_velocity: 0.0,
            hp_cutoff: wave.hpf_cutoff * wave.hpf_cutoff * 0.1,
            hp_sweep: 1.0 + wave.hpf_cutoff_sweep * 0.0003,
            hp_state: 0.0,
        }
    }

    /// Advances the high-pass cutoff sweep. Called once per output sample.
    pub fn step(&mut self) {
        self.hp_cutoff = (self.hp_cutoff * self.hp_sweep).clamp(MIN_HIGHPASS, MAX_CUTOFF);
    }

    /// Filters one sub-sample.
    pub fn apply(&mut self, sample: f64) -> f64 {
        let previous = self.lp_state;

        self.lp_cutoff = (self.lp_cutoff * self.lp_sweep).clamp(0.0, MAX_CUTOFF);
        if self.bypass_lowpass {
            self.lp_state = sample;
            self.lp_velocity = 0.0;
        } else {
            self.lp_velocity += (sample - self.lp_state) * self.lp_cutoff;
            self.lp_velocity -= self.lp_velocity * self.lp_damping;
        }
        self.lp_state += self.lp_velocity;

        self.hp_state += self.lp_state - previous;
        self.hp_state -= self.hp_state * self.hp_cutoff;
        self.hp_state
    }

    /// Current high-pass coefficient.
    pub fn highpass_cutoff(&self) -> f64 {
        self.hp_cutoff
    }

    /// Current low-pass coefficient.
    pub fn lowpass_cutoff(&self) -> f64 {
        self.lp_cutoff
    }
}
