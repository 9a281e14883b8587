//! Basic waveform shapes and the square duty-cycle tracker.
//!
//! Shapes are evaluated from an integer phase position within a cycle of
//! `period` samples.

use std::f64::consts::PI;

use sfxgen_spec::{SoundWave, WaveType};

use crate::noise::NoiseBuffer;

/// Square wave: +0.5 before the duty point, -0.5 after.
#[inline]
pub fn square(fp: f64, duty: f64) -> f64 {
    if fp < duty {
        0.5
    } else {
        -0.5
    }
}

/// Falling sawtooth from 1 to -1.
#[inline]
pub fn sawtooth(fp: f64) -> f64 {
    1.0 - fp * 2.0
}

/// Sine wave.
#[inline]
pub fn sine(fp: f64) -> f64 {
    (fp * 2.0 * PI).sin()
}

/// Triangle wave.
#[inline]
pub fn triangle(fp: f64) -> f64 {
    1.0 - (fp.round() - fp).abs() * 4.0
}

/// Evaluates one raw oscillator sample.
///
/// `phase` must be below `period`.
pub fn sample(
    wave_type: WaveType,
    phase: usize,
    period: usize,
    duty: f64,
    noise: &NoiseBuffer,
) -> f64 {
    let fp = phase as f64 / period as f64;
    match wave_type {
        WaveType::Square => square(fp, duty),
        WaveType::Sawtooth => sawtooth(fp),
        WaveType::Sine => sine(fp),
        WaveType::Noise => noise.at_phase(phase, period),
        WaveType::Triangle => triangle(fp),
    }
}

/// Sweeping duty cycle for the square wave.
#[derive(Debug, Clone)]
pub struct SquareDuty {
    start: f64,
    duty: f64,
    sweep: f64,
}

impl SquareDuty {
    /// Creates the tracker from `square_duty` and `duty_sweep`.
    pub fn new(wave: &SoundWave) -> Self {
        let start = 0.5 - wave.square_duty * 0.5;
        Self {
            start,
            duty: start,
            sweep: -wave.duty_sweep * 0.00005,
        }
    }

    /// Applies the sweep and returns the clamped duty.
    pub fn advance(&mut self) -> f64 {
        self.duty = (self.duty + self.sweep).clamp(0.0, 1.0);
        self.duty
    }

    /// Current duty.
    pub fn duty(&self) -> f64 {
        self.duty
    }

    /// Restores the initial duty.
    pub fn reset(&mut self) {
        self.duty = self.start;
    }
}
