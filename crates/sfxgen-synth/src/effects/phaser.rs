//! Short feed-forward comb ("phaser") over a 1024-sample delay line.

use sfxgen_spec::SoundWave;

use super::delay_line::DelayLine;

/// Ring size of the phaser delay line.
pub const PHASER_LENGTH: usize = 1024;

/// Comb filter whose delay sweeps over the note.
#[derive(Debug, Clone)]
pub struct Phaser {
    line: DelayLine,
    phase: f64,
    sweep: f64,
    delay: usize,
}

impl Phaser {
    /// Creates the phaser from the record's offset and sweep.
    ///
    /// Both values are squared, keeping the sign of the parameter.
    pub fn new(wave: &SoundWave) -> Self {
        let phase = signed_square(wave.phaser_offset) * 1020.0;
        Self {
            line: DelayLine::new(PHASER_LENGTH),
            phase,
            sweep: signed_square(wave.phaser_sweep),
            delay: delay_for(phase),
        }
    }

    /// Advances the sweep. Called once per output sample.
    pub fn step(&mut self) {
        self.phase += self.sweep;
        self.delay = delay_for(self.phase);
    }

    /// Current delay in samples.
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Processes one sub-sample.
    pub fn apply(&mut self, sample: f64) -> f64 {
        self.line.write(sample);
        let out = sample + self.line.read(self.delay);
        self.line.advance();
        out
    }
}

fn signed_square(value: f64) -> f64 {
    value * value.abs()
}

fn delay_for(phase: f64) -> usize {
    (phase.abs() as usize).min(PHASER_LENGTH - 1)
}
