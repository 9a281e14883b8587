//! Legal ranges for every shape parameter of a sound wave.

use serde::{Deserialize, Serialize};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Lowest accepted sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Closed interval a parameter is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl ParamRange {
    /// `[0, 1]`
    pub const UNIPOLAR: ParamRange = ParamRange { min: 0.0, max: 1.0 };
    /// `[-1, 1]`
    pub const BIPOLAR: ParamRange = ParamRange {
        min: -1.0,
        max: 1.0,
    };

    /// Returns true if `value` lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the range. NaN becomes `fallback`.
    pub fn clamp_or(&self, value: f64, fallback: f64) -> f64 {
        if value.is_nan() {
            fallback
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Every continuous shape parameter of a [`crate::SoundWave`].
///
/// Waveform kind, seed and sample rate are not shape parameters and are not
/// listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    SquareDuty,
    DutySweep,
    StartFrequency,
    MinFrequency,
    Slide,
    DeltaSlide,
    ChangeAmount,
    ChangeSpeed,
    VibratoDepth,
    VibratoSpeed,
    AttackTime,
    SustainTime,
    SustainPunch,
    DecayTime,
    RepeatSpeed,
    PhaserOffset,
    PhaserSweep,
    LpfCutoff,
    LpfCutoffSweep,
    LpfResonance,
    HpfCutoff,
    HpfCutoffSweep,
}

impl Param {
    /// All shape parameters in record order.
    pub const ALL: [Param; 22] = [
        Param::SquareDuty,
        Param::DutySweep,
        Param::StartFrequency,
        Param::MinFrequency,
        Param::Slide,
        Param::DeltaSlide,
        Param::ChangeAmount,
        Param::ChangeSpeed,
        Param::VibratoDepth,
        Param::VibratoSpeed,
        Param::AttackTime,
        Param::SustainTime,
        Param::SustainPunch,
        Param::DecayTime,
        Param::RepeatSpeed,
        Param::PhaserOffset,
        Param::PhaserSweep,
        Param::LpfCutoff,
        Param::LpfCutoffSweep,
        Param::LpfResonance,
        Param::HpfCutoff,
        Param::HpfCutoffSweep,
    ];

    /// Legal range of the parameter.
    ///
    /// `MinFrequency` is additionally bounded by the record's
    /// `start_frequency`; that cross-field rule lives in `sanitize`.
    pub fn range(self) -> ParamRange {
        match self {
            Param::DutySweep
            | Param::Slide
            | Param::DeltaSlide
            | Param::ChangeAmount
            | Param::PhaserOffset
            | Param::PhaserSweep
            | Param::LpfCutoffSweep
            | Param::HpfCutoffSweep => ParamRange::BIPOLAR,
            _ => ParamRange::UNIPOLAR,
        }
    }

    /// Value of the parameter in [`crate::SoundWave::default`].
    pub fn default_value(self) -> f64 {
        match self {
            Param::StartFrequency => 0.3,
            Param::SustainTime => 0.3,
            Param::DecayTime => 0.4,
            Param::LpfCutoff => 1.0,
            _ => 0.0,
        }
    }

    /// Field name as it appears in persisted JSON.
    pub fn name(self) -> &'static str {
        match self {
            Param::SquareDuty => "square_duty",
            Param::DutySweep => "duty_sweep",
            Param::StartFrequency => "start_frequency",
            Param::MinFrequency => "min_frequency",
            Param::Slide => "slide",
            Param::DeltaSlide => "delta_slide",
            Param::ChangeAmount => "change_amount",
            Param::ChangeSpeed => "change_speed",
            Param::VibratoDepth => "vibrato_depth",
            Param::VibratoSpeed => "vibrato_speed",
            Param::AttackTime => "attack_time",
            Param::SustainTime => "sustain_time",
            Param::SustainPunch => "sustain_punch",
            Param::DecayTime => "decay_time",
            Param::RepeatSpeed => "repeat_speed",
            Param::PhaserOffset => "phaser_offset",
            Param::PhaserSweep => "phaser_sweep",
            Param::LpfCutoff => "lpf_cutoff",
            Param::LpfCutoffSweep => "lpf_cutoff_sweep",
            Param::LpfResonance => "lpf_resonance",
            Param::HpfCutoff => "hpf_cutoff",
            Param::HpfCutoffSweep => "hpf_cutoff_sweep",
        }
    }
}
