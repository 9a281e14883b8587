//! Oscillator period tracking: slide, delta slide and the one-shot pitch jump.
//!
//! The tracker works in periods (samples per oscillator cycle) rather than
//! frequencies. A period growing past the ceiling derived from
//! `min_frequency` means the pitch fell below the floor, which ends the note
//! when the floor is nonzero.

use sfxgen_spec::SoundWave;

/// Converts a normalized frequency to a period in samples.
pub fn frequency_to_period(frequency: f64) -> f64 {
    100.0 / (frequency * frequency + 0.001)
}

/// Converts a normalized speed to a countdown in samples.
///
/// Shared by the pitch jump and the repeat timer.
pub fn speed_to_samples(speed: f64) -> u32 {
    let inv = 1.0 - speed;
    (inv * inv * 20_000.0 + 32.0) as u32
}

/// One-shot multiplicative pitch jump.
#[derive(Debug, Clone)]
pub struct Arpeggio {
    modulation: f64,
    limit: u32,
    time: u32,
}

impl Arpeggio {
    /// Creates the jump from `change_amount` and `change_speed`.
    ///
    /// A change speed of exactly 1 disables the jump.
    pub fn new(wave: &SoundWave) -> Self {
        let amount = wave.change_amount;
        let modulation = if amount >= 0.0 {
            1.0 - amount * amount * 0.9
        } else {
            1.0 + amount * amount * 10.0
        };
        let limit = if wave.change_speed == 1.0 {
            0
        } else {
            speed_to_samples(wave.change_speed)
        };

        Self {
            modulation,
            limit,
            time: 0,
        }
    }

    /// Period multiplier applied when the jump fires.
    pub fn modulation(&self) -> f64 {
        self.modulation
    }

    /// Samples remaining until the jump, or `None` once fired or disabled.
    pub fn pending(&self) -> Option<u32> {
        (self.limit != 0).then(|| self.limit.saturating_sub(self.time))
    }

    /// Advances one sample and returns the period multiplier for it.
    pub fn tick(&mut self) -> f64 {
        self.time += 1;
        if self.limit != 0 && self.time >= self.limit {
            self.limit = 0;
            self.modulation
        } else {
            1.0
        }
    }
}

/// Tracks the oscillator period across a note.
#[derive(Debug, Clone)]
pub struct PitchTracker {
    start_period: f64,
    max_period: f64,
    start_slide: f64,
    delta_slide: f64,
    stops_at_floor: bool,
    arpeggio_template: Arpeggio,

    period: f64,
    slide: f64,
    arpeggio: Arpeggio,
    out_of_bounds: bool,
}

impl PitchTracker {
    /// Creates a tracker from the record's pitch fields.
    pub fn new(wave: &SoundWave) -> Self {
        let start_period = frequency_to_period(wave.start_frequency);
        let start_slide = 1.0 - wave.slide.powi(3) * 0.01;
        let arpeggio = Arpeggio::new(wave);

        Self {
            start_period,
            max_period: frequency_to_period(wave.min_frequency),
            start_slide,
            delta_slide: -wave.delta_slide.powi(3) * 0.000_001,
            stops_at_floor: wave.min_frequency > 0.0,
            arpeggio_template: arpeggio.clone(),
            period: start_period,
            slide: start_slide,
            arpeggio,
            out_of_bounds: false,
        }
    }

    /// Restores period, slide and pitch jump to their initial values.
    pub fn reset(&mut self) {
        self.period = self.start_period;
        self.slide = self.start_slide;
        self.arpeggio = self.arpeggio_template.clone();
    }

    /// Advances one sample and returns the new period in samples.
    ///
    /// The result is not floored; the caller clamps it to its minimum
    /// oscillator period.
    pub fn next_period(&mut self) -> f64 {
        self.period *= self.arpeggio.tick();

        self.slide += self.delta_slide;
        self.period *= self.slide;

        if self.period > self.max_period {
            self.period = self.max_period;
            if self.stops_at_floor {
                self.out_of_bounds = true;
            }
        }

        self.period
    }

    /// Current period in samples.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// True once the pitch has fallen below a nonzero frequency floor.
    pub fn frequency_out_of_bounds(&self) -> bool {
        self.out_of_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch_wave(start: f64, min: f64, slide: f64) -> SoundWave {
        SoundWave {
            start_frequency: start,
            min_frequency: min,
            slide,
            ..SoundWave::default()
        }
    }

    #[test]
    fn test_speed_to_samples() {
        assert_eq!(speed_to_samples(0.0), 20_032);
        assert_eq!(speed_to_samples(0.5), 5_032);
        assert_eq!(speed_to_samples(1.0), 32);
    }

    #[test]
    fn test_steady_pitch_without_slide() {
        let mut tracker = PitchTracker::new(&pitch_wave(0.5, 0.0, 0.0));
        let start = frequency_to_period(0.5);
        for _ in 0..1000 {
            assert_eq!(tracker.next_period(), start);
        }
        assert!(!tracker.frequency_out_of_bounds());
    }

    #[test]
    fn test_falling_pitch_hits_floor() {
        let mut tracker = PitchTracker::new(&pitch_wave(0.5, 0.4, -1.0));
        let ceiling = frequency_to_period(0.4);

        let mut steps = 0;
        while !tracker.frequency_out_of_bounds() {
            let period = tracker.next_period();
            assert!(period <= ceiling);
            steps += 1;
            assert!(steps < 100_000);
        }
        assert_eq!(tracker.period(), ceiling);
    }

    #[test]
    fn test_zero_floor_clamps_without_stopping() {
        let mut tracker = PitchTracker::new(&pitch_wave(0.5, 0.0, -1.0));
        let ceiling = frequency_to_period(0.0);
        for _ in 0..200_000 {
            tracker.next_period();
        }
        assert_eq!(tracker.period(), ceiling);
        assert!(!tracker.frequency_out_of_bounds());
    }

    #[test]
    fn test_rising_pitch_shrinks_period() {
        let mut tracker = PitchTracker::new(&pitch_wave(0.3, 0.0, 0.5));
        let first = tracker.next_period();
        let mut last = first;
        for _ in 0..100 {
            let period = tracker.next_period();
            assert!(period < last);
            last = period;
        }
    }

    #[test]
    fn test_arpeggio_fires_once() {
        let wave = SoundWave {
            start_frequency: 0.5,
            change_amount: 0.5,
            change_speed: 1.0 - (0.5f64).sqrt() / 10.0,
            ..SoundWave::default()
        };
        let mut arpeggio = Arpeggio::new(&wave);
        let limit = arpeggio.pending().unwrap();
        let modulation = arpeggio.modulation();
        assert!((modulation - 0.775).abs() < 1e-12);

        let fired: Vec<u32> = (1..=limit + 100)
            .filter(|_| arpeggio.tick() != 1.0)
            .collect();
        assert_eq!(fired.len(), 1);
        assert_eq!(arpeggio.pending(), None);
    }

    #[test]
    fn test_arpeggio_applies_to_period() {
        let wave = SoundWave {
            start_frequency: 0.5,
            change_amount: -0.5,
            change_speed: 1.0 - 0.01,
            ..SoundWave::default()
        };
        let mut tracker = PitchTracker::new(&wave);
        let start = frequency_to_period(0.5);
        let limit = speed_to_samples(wave.change_speed);

        for _ in 1..limit {
            assert_eq!(tracker.next_period(), start);
        }
        assert!((tracker.next_period() - start * 3.5).abs() < 1e-9);
        assert!((tracker.next_period() - start * 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_change_speed_one_disables_jump() {
        let wave = SoundWave {
            change_amount: 1.0,
            change_speed: 1.0,
            ..SoundWave::default()
        };
        let mut arpeggio = Arpeggio::new(&wave);
        assert_eq!(arpeggio.pending(), None);
        assert!((0..30_000).all(|_| arpeggio.tick() == 1.0));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let wave = SoundWave {
            start_frequency: 0.6,
            slide: 0.4,
            delta_slide: 0.3,
            change_amount: 0.4,
            change_speed: 0.99,
            ..SoundWave::default()
        };
        let mut tracker = PitchTracker::new(&wave);
        let fresh: Vec<f64> = (0..500).map(|_| tracker.next_period()).collect();

        tracker.reset();
        let replay: Vec<f64> = (0..500).map(|_| tracker.next_period()).collect();
        assert_eq!(fresh, replay);
    }
}
