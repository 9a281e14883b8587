//! Sample-by-sample rendering of a sound wave.
//!
//! Each output sample runs the repeat timer, envelope, phaser and filter
//! sweeps, and the pitch tracker once, then averages [`SUPERSAMPLING`]
//! oscillator sub-samples through filter, phaser and envelope. Rendering
//! stops when the envelope completes, when the pitch falls below a nonzero
//! floor, or at [`MAX_LENGTH_SECONDS`].

#[cfg(test)]
mod tests;

use sfxgen_spec::{SoundWave, WaveType};

use crate::effects::Phaser;
use crate::envelope::Envelope;
use crate::filter::SfxFilter;
use crate::modulation::{speed_to_samples, PitchTracker, Vibrato};
use crate::noise::NoiseBuffer;
use crate::oscillator::{self, SquareDuty};
use crate::sound::SoundBuffer;

/// Oscillator sub-samples averaged into each output sample.
pub const SUPERSAMPLING: usize = 8;

/// Fixed output gain applied after averaging.
pub const OUTPUT_SCALE: f64 = 0.2;

/// Hard cap on rendered length.
pub const MAX_LENGTH_SECONDS: usize = 10;

/// Shortest oscillator period in samples.
pub const MIN_PERIOD: usize = 8;

/// Why rendering stopped. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The decay stage completed.
    EnvelopeFinished,
    /// The pitch fell below `min_frequency`.
    FrequencyOutOfBounds,
    /// The length cap was reached first.
    LengthCap,
}

/// Rendered samples plus how the note ended.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Mono samples in `[-1, 1]`.
    pub samples: Vec<f64>,
    /// How generation ended.
    pub stop_reason: StopReason,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl Rendered {
    /// Packages the samples as a mono PCM buffer.
    pub fn into_buffer(self) -> SoundBuffer {
        SoundBuffer::mono(self.samples, self.sample_rate)
    }
}

/// Renders a wave into a mono PCM buffer.
pub fn create_buffer(wave: &SoundWave) -> SoundBuffer {
    render(wave).into_buffer()
}

/// Renders a wave, reporting why generation stopped.
///
/// The record is sanitized on a private copy first. The output holds at
/// least one sample: a note that ends on its first sample renders as a single
/// silent sample.
pub fn render(wave: &SoundWave) -> Rendered {
    let wave = wave.clone().sanitized();
    let max_len = wave.sample_rate as usize * MAX_LENGTH_SECONDS;

    let mut samples = vec![0.0; max_len];
    let mut voice = Voice::new(&wave);
    let mut len = max_len;
    let mut stop_reason = StopReason::LengthCap;

    for (i, out) in samples.iter_mut().enumerate() {
        match voice.next_sample() {
            Ok(sample) => *out = sample,
            Err(reason) => {
                len = i;
                stop_reason = reason;
                break;
            }
        }
    }

    samples.truncate(len.max(1));
    Rendered {
        samples,
        stop_reason,
        sample_rate: wave.sample_rate,
    }
}

/// Per-note synthesis state.
struct Voice {
    wave_type: WaveType,
    envelope: Envelope,
    filter: SfxFilter,
    phaser: Phaser,
    pitch: PitchTracker,
    vibrato: Vibrato,
    duty: SquareDuty,
    noise: NoiseBuffer,
    repeat_limit: u32,
    repeat_time: u32,
    phase: usize,
}

impl Voice {
    fn new(wave: &SoundWave) -> Self {
        let repeat_limit = if wave.repeat_speed == 0.0 {
            0
        } else {
            speed_to_samples(wave.repeat_speed)
        };

        Self {
            wave_type: wave.wave_type,
            envelope: Envelope::new(wave),
            filter: SfxFilter::new(wave),
            phaser: Phaser::new(wave),
            pitch: PitchTracker::new(wave),
            vibrato: Vibrato::new(wave),
            duty: SquareDuty::new(wave),
            noise: NoiseBuffer::new(wave.random_seed),
            repeat_limit,
            repeat_time: 0,
            phase: 0,
        }
    }

    /// Produces the next output sample, or the reason the note ended.
    fn next_sample(&mut self) -> Result<f64, StopReason> {
        self.repeat_time += 1;
        if self.repeat_limit != 0 && self.repeat_time >= self.repeat_limit {
            self.repeat_time = 0;
            self.pitch.reset();
            self.duty.reset();
        }

        if !self.envelope.step() {
            return Err(StopReason::EnvelopeFinished);
        }

        self.phaser.step();
        self.filter.step();

        let period = self.pitch.next_period();
        if self.pitch.frequency_out_of_bounds() {
            return Err(StopReason::FrequencyOutOfBounds);
        }
        let period = (self.vibrato.apply(period) as usize).max(MIN_PERIOD);
        let duty = self.duty.advance();
        let volume = self.envelope.value();

        let mut sum = 0.0;
        for _ in 0..SUPERSAMPLING {
            self.phase += 1;
            if self.phase >= period {
                self.phase %= period;
                if self.wave_type == WaveType::Noise {
                    self.noise.generate();
                }
            }

            let raw = oscillator::sample(self.wave_type, self.phase, period, duty, &self.noise);
            let filtered = self.filter.apply(raw);
            sum += self.phaser.apply(filtered) * volume;
        }

        Ok((sum / SUPERSAMPLING as f64 * OUTPUT_SCALE).clamp(-1.0, 1.0))
    }
}
