//! The sound wave parameter record.

use serde::{Deserialize, Serialize};

use crate::error::SpecResult;
use crate::ranges::{Param, DEFAULT_SAMPLE_RATE, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};

/// Oscillator waveform kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveType {
    /// Square wave with a variable duty cycle.
    #[default]
    Square,
    /// Falling sawtooth.
    Sawtooth,
    /// Sine wave.
    Sine,
    /// Buffered white noise, refreshed once per oscillator cycle.
    Noise,
    /// Triangle wave.
    Triangle,
}

impl WaveType {
    /// All waveform kinds in index order.
    pub const ALL: [WaveType; 5] = [
        WaveType::Square,
        WaveType::Sawtooth,
        WaveType::Sine,
        WaveType::Noise,
        WaveType::Triangle,
    ];

    /// Classic numeric index (square = 0 ... triangle = 4).
    pub fn index(self) -> u32 {
        match self {
            WaveType::Square => 0,
            WaveType::Sawtooth => 1,
            WaveType::Sine => 2,
            WaveType::Noise => 3,
            WaveType::Triangle => 4,
        }
    }

    /// Looks up a waveform by its numeric index.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Complete description of one synthesized sound.
///
/// All shape fields are normalized; see [`Param::range`] for the legal range
/// of each. Call [`SoundWave::sanitize`] after any direct assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundWave {
    /// Oscillator waveform.
    pub wave_type: WaveType,
    /// Square duty cycle (0 = 50% duty, 1 = 0% duty).
    pub square_duty: f64,
    /// Duty cycle sweep rate.
    pub duty_sweep: f64,

    /// Start frequency.
    pub start_frequency: f64,
    /// Frequency floor. Reaching it ends the note when nonzero.
    pub min_frequency: f64,
    /// Pitch slide.
    pub slide: f64,
    /// Slide of the slide.
    pub delta_slide: f64,

    /// Pitch jump factor. Positive raises, negative lowers.
    pub change_amount: f64,
    /// How soon the pitch jump fires (1 = never).
    pub change_speed: f64,

    /// Vibrato depth.
    pub vibrato_depth: f64,
    /// Vibrato speed.
    pub vibrato_speed: f64,

    /// Attack time.
    pub attack_time: f64,
    /// Sustain time.
    pub sustain_time: f64,
    /// Boost at the start of the sustain stage.
    pub sustain_punch: f64,
    /// Decay time.
    pub decay_time: f64,

    /// Repeat speed (0 = never repeat).
    pub repeat_speed: f64,

    /// Phaser offset.
    pub phaser_offset: f64,
    /// Phaser sweep.
    pub phaser_sweep: f64,

    /// Low-pass cutoff (1 = filter bypassed).
    pub lpf_cutoff: f64,
    /// Low-pass cutoff sweep.
    pub lpf_cutoff_sweep: f64,
    /// Low-pass resonance.
    pub lpf_resonance: f64,
    /// High-pass cutoff.
    pub hpf_cutoff: f64,
    /// High-pass cutoff sweep.
    pub hpf_cutoff_sweep: f64,

    /// Seed of the noise table.
    pub random_seed: u32,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl Default for SoundWave {
    fn default() -> Self {
        Self {
            wave_type: WaveType::Square,
            square_duty: 0.0,
            duty_sweep: 0.0,
            start_frequency: 0.3,
            min_frequency: 0.0,
            slide: 0.0,
            delta_slide: 0.0,
            change_amount: 0.0,
            change_speed: 0.0,
            vibrato_depth: 0.0,
            vibrato_speed: 0.0,
            attack_time: 0.0,
            sustain_time: 0.3,
            sustain_punch: 0.0,
            decay_time: 0.4,
            repeat_speed: 0.0,
            phaser_offset: 0.0,
            phaser_sweep: 0.0,
            lpf_cutoff: 1.0,
            lpf_cutoff_sweep: 0.0,
            lpf_resonance: 0.0,
            hpf_cutoff: 0.0,
            hpf_cutoff_sweep: 0.0,
            random_seed: 0,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl SoundWave {
    /// Reads a shape parameter.
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::SquareDuty => self.square_duty,
            Param::DutySweep => self.duty_sweep,
            Param::StartFrequency => self.start_frequency,
            Param::MinFrequency => self.min_frequency,
            Param::Slide => self.slide,
            Param::DeltaSlide => self.delta_slide,
            Param::ChangeAmount => self.change_amount,
            Param::ChangeSpeed => self.change_speed,
            Param::VibratoDepth => self.vibrato_depth,
            Param::VibratoSpeed => self.vibrato_speed,
            Param::AttackTime => self.attack_time,
            Param::SustainTime => self.sustain_time,
            Param::SustainPunch => self.sustain_punch,
            Param::DecayTime => self.decay_time,
            Param::RepeatSpeed => self.repeat_speed,
            Param::PhaserOffset => self.phaser_offset,
            Param::PhaserSweep => self.phaser_sweep,
            Param::LpfCutoff => self.lpf_cutoff,
            Param::LpfCutoffSweep => self.lpf_cutoff_sweep,
            Param::LpfResonance => self.lpf_resonance,
            Param::HpfCutoff => self.hpf_cutoff,
            Param::HpfCutoffSweep => self.hpf_cutoff_sweep,
        }
    }

    /// Mutable access to a shape parameter.
    pub fn get_mut(&mut self, param: Param) -> &mut f64 {
        match param {
            Param::SquareDuty => &mut self.square_duty,
            Param::DutySweep => &mut self.duty_sweep,
            Param::StartFrequency => &mut self.start_frequency,
            Param::MinFrequency => &mut self.min_frequency,
            Param::Slide => &mut self.slide,
            Param::DeltaSlide => &mut self.delta_slide,
            Param::ChangeAmount => &mut self.change_amount,
            Param::ChangeSpeed => &mut self.change_speed,
            Param::VibratoDepth => &mut self.vibrato_depth,
            Param::VibratoSpeed => &mut self.vibrato_speed,
            Param::AttackTime => &mut self.attack_time,
            Param::SustainTime => &mut self.sustain_time,
            Param::SustainPunch => &mut self.sustain_punch,
            Param::DecayTime => &mut self.decay_time,
            Param::RepeatSpeed => &mut self.repeat_speed,
            Param::PhaserOffset => &mut self.phaser_offset,
            Param::PhaserSweep => &mut self.phaser_sweep,
            Param::LpfCutoff => &mut self.lpf_cutoff,
            Param::LpfCutoffSweep => &mut self.lpf_cutoff_sweep,
            Param::LpfResonance => &mut self.lpf_resonance,
            Param::HpfCutoff => &mut self.hpf_cutoff,
            Param::HpfCutoffSweep => &mut self.hpf_cutoff_sweep,
        }
    }

    /// Clamps every field into its legal range.
    ///
    /// NaN fields reset to their default, a zero sample rate resets to
    /// [`DEFAULT_SAMPLE_RATE`], and `min_frequency` is capped at
    /// `start_frequency`. Idempotent.
    pub fn sanitize(&mut self) {
        for param in Param::ALL {
            let value = self.get_mut(param);
            *value = param.range().clamp_or(*value, param.default_value());
        }

        if self.min_frequency > self.start_frequency {
            self.min_frequency = self.start_frequency;
        }

        self.sample_rate = if self.sample_rate == 0 {
            DEFAULT_SAMPLE_RATE
        } else {
            self.sample_rate.clamp(MIN_SAMPLE_RATE, MAX_SAMPLE_RATE)
        };
    }

    /// Returns a sanitized copy.
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// Returns true if [`SoundWave::sanitize`] would not change the record.
    pub fn is_sanitized(&self) -> bool {
        Param::ALL
            .iter()
            .all(|&param| param.range().contains(self.get(param)))
            && self.min_frequency <= self.start_frequency
            && (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate)
    }

    /// Parses a record from JSON and sanitizes it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let wave: SoundWave = serde_json::from_str(json)?;
        Ok(wave.sanitized())
    }

    /// Serializes the record to compact JSON.
    pub fn to_json(&self) -> SpecResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the record to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
