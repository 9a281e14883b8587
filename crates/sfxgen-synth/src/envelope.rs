//! Attack-sustain-decay volume envelope.
//!
//! Stage lengths are measured in output samples and derived from the
//! record's normalized times as `time^2 * 100000`. The envelope finishing is
//! one of the two normal ways a note ends.

use sfxgen_spec::SoundWave;

/// Samples per unit of squared envelope time.
const STAGE_SCALE: f64 = 100_000.0;

/// Envelope stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    /// Linear ramp from 0 to 1.
    Attack,
    /// Held at 1 plus a punch boost that fades over the stage.
    Sustain,
    /// Linear ramp from 1 to 0.
    Decay,
    /// Envelope completed.
    Finished,
}

impl EnvelopeStage {
    fn next(self) -> Self {
        match self {
            EnvelopeStage::Attack => EnvelopeStage::Sustain,
            EnvelopeStage::Sustain => EnvelopeStage::Decay,
            EnvelopeStage::Decay | EnvelopeStage::Finished => EnvelopeStage::Finished,
        }
    }
}

/// Converts a normalized envelope time to a stage length in samples.
pub fn stage_length(time: f64) -> u32 {
    (time * time * STAGE_SCALE) as u32
}

/// Three-stage volume envelope.
#[derive(Debug, Clone)]
pub struct Envelope {
    lengths: [u32; 3],
    punch: f64,
    stage: EnvelopeStage,
    time: u32,
    volume: f64,
}

impl Envelope {
    /// Creates an envelope from the record's attack, sustain, punch and decay.
    pub fn new(wave: &SoundWave) -> Self {
        Self {
            lengths: [
                stage_length(wave.attack_time),
                stage_length(wave.sustain_time),
                stage_length(wave.decay_time),
            ],
            punch: wave.sustain_punch,
            stage: EnvelopeStage::Attack,
            time: 0,
            volume: 0.0,
        }
    }

    /// Stage lengths in samples (attack, sustain, decay).
    pub fn lengths(&self) -> [u32; 3] {
        self.lengths
    }

    /// Current stage.
    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    /// Advances one output sample.
    ///
    /// Returns `false` once the decay stage has completed; no further samples
    /// should be produced after that.
    pub fn step(&mut self) -> bool {
        let Some(length) = self.stage_len() else {
            return false;
        };

        self.time += 1;
        if self.time > length {
            self.time = 0;
            self.stage = self.stage.next();
            if self.stage == EnvelopeStage::Finished {
                return false;
            }
        }

        self.volume = self.level();
        true
    }

    /// Current volume multiplier.
    pub fn value(&self) -> f64 {
        self.volume
    }

    fn stage_len(&self) -> Option<u32> {
        match self.stage {
            EnvelopeStage::Attack => Some(self.lengths[0]),
            EnvelopeStage::Sustain => Some(self.lengths[1]),
            EnvelopeStage::Decay => Some(self.lengths[2]),
            EnvelopeStage::Finished => None,
        }
    }

    fn level(&self) -> f64 {
        // A zero-length stage counts as fully elapsed.
        let progress = match self.stage_len() {
            Some(0) | None => 1.0,
            Some(length) => self.time as f64 / length as f64,
        };

        match self.stage {
            EnvelopeStage::Attack => progress,
            EnvelopeStage::Sustain => 1.0 + (1.0 - progress) * 2.0 * self.punch,
            EnvelopeStage::Decay => 1.0 - progress,
            EnvelopeStage::Finished => 0.0,
        }
    }
}
