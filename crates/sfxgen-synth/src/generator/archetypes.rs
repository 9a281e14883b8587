//! Archetype distributions.
//!
//! Each factory starts from the default record, assigns the fields that
//! characterize the archetype and leaves the rest neutral.

use sfxgen_spec::{SoundWave, WaveType};

use super::{SoundGenerator, SoundKind};
use crate::rng::RandomSource;

impl<R: RandomSource> SoundGenerator<R> {
    /// Coin or item pickup: a bright tone with punch and an optional upward
    /// pitch jump.
    pub fn generate_pickup_coin(&mut self) -> SoundWave {
        let mut wave = self.base_wave();

        wave.start_frequency = 0.4 + self.frnd(0.5);
        wave.attack_time = 0.0;
        wave.sustain_time = self.frnd(0.1);
        wave.decay_time = 0.1 + self.frnd(0.4);
        wave.sustain_punch = 0.3 + self.frnd(0.3);
        if self.flip() {
            wave.change_speed = 0.5 + self.frnd(0.2);
            wave.change_amount = 0.2 + self.frnd(0.4);
        }

        self.finish(SoundKind::PickupCoin.name(), wave)
    }

    /// Laser or shot: a falling square, sawtooth or sine.
    pub fn generate_laser_shoot(&mut self) -> SoundWave {
        let mut wave = self.base_wave();

        let mut shape = self.rnd(2);
        if shape == 2 && self.flip() {
            shape = self.rnd(1);
        }
        wave.wave_type = WaveType::from_index(shape).unwrap_or_default();

        wave.start_frequency = 0.5 + self.frnd(0.5);
        wave.min_frequency = (wave.start_frequency - 0.2 - self.frnd(0.6)).max(0.2);
        wave.slide = -0.15 - self.frnd(0.2);
        if self.rnd(2) == 0 {
            wave.start_frequency = 0.3 + self.frnd(0.6);
            wave.min_frequency = self.frnd(0.1);
            wave.slide = -0.35 - self.frnd(0.3);
        }

        if self.flip() {
            wave.square_duty = self.frnd(0.5);
            wave.duty_sweep = self.frnd(0.2);
        } else {
            wave.square_duty = 0.4 + self.frnd(0.5);
            wave.duty_sweep = -self.frnd(0.7);
        }

        wave.attack_time = 0.0;
        wave.sustain_time = 0.1 + self.frnd(0.2);
        wave.decay_time = self.frnd(0.4);
        if self.flip() {
            wave.sustain_punch = self.frnd(0.3);
        }

        if self.rnd(2) == 0 {
            wave.phaser_offset = self.frnd(0.2);
            wave.phaser_sweep = -self.frnd(0.2);
        }
        if self.flip() {
            wave.hpf_cutoff = self.frnd(0.3);
        }

        self.finish(SoundKind::LaserShoot.name(), wave)
    }

    /// Explosion: low noise with punch, often repeated or phased.
    pub fn generate_explosion(&mut self) -> SoundWave {
        let mut wave = self.base_wave();
        wave.wave_type = WaveType::Noise;

        if self.flip() {
            wave.start_frequency = 0.1 + self.frnd(0.4);
            wave.slide = -0.1 + self.frnd(0.4);
        } else {
            wave.start_frequency = 0.2 + self.frnd(0.7);
            wave.slide = -0.2 - self.frnd(0.2);
        }
        wave.start_frequency *= wave.start_frequency;
        if self.rnd(4) == 0 {
            wave.slide = 0.0;
        }
        if self.rnd(2) == 0 {
            wave.repeat_speed = 0.3 + self.frnd(0.5);
        }

        wave.attack_time = 0.0;
        wave.sustain_time = 0.1 + self.frnd(0.3);
        wave.decay_time = self.frnd(0.5);

        if !self.flip() {
            wave.phaser_offset = -0.3 + self.frnd(0.9);
            wave.phaser_sweep = -self.frnd(0.3);
        }
        wave.sustain_punch = 0.2 + self.frnd(0.6);
        if self.flip() {
            wave.vibrato_depth = self.frnd(0.7);
            wave.vibrato_speed = self.frnd(0.6);
        }
        if self.rnd(2) == 0 {
            wave.change_speed = 0.6 + self.frnd(0.3);
            wave.change_amount = 0.8 - self.frnd(1.6);
        }

        self.finish(SoundKind::Explosion.name(), wave)
    }

    /// Powerup: a rising sweep, either repeated or with vibrato.
    pub fn generate_powerup(&mut self) -> SoundWave {
        let mut wave = self.base_wave();

        if self.flip() {
            wave.wave_type = WaveType::Sawtooth;
        } else {
            wave.square_duty = self.frnd(0.6);
        }

        if self.flip() {
            wave.start_frequency = 0.2 + self.frnd(0.3);
            wave.slide = 0.1 + self.frnd(0.4);
            wave.repeat_speed = 0.4 + self.frnd(0.4);
        } else {
            wave.start_frequency = 0.2 + self.frnd(0.3);
            wave.slide = 0.05 + self.frnd(0.2);
            if self.flip() {
                wave.vibrato_depth = self.frnd(0.7);
                wave.vibrato_speed = self.frnd(0.6);
            }
        }

        wave.attack_time = 0.0;
        wave.sustain_time = self.frnd(0.4);
        wave.decay_time = 0.1 + self.frnd(0.4);

        self.finish(SoundKind::Powerup.name(), wave)
    }

    /// Hit or hurt: a short falling square, sawtooth or noise burst.
    pub fn generate_hit_hurt(&mut self) -> SoundWave {
        let mut wave = self.base_wave();

        wave.wave_type = match self.rnd(2) {
            0 => WaveType::Square,
            1 => WaveType::Sawtooth,
            _ => WaveType::Noise,
        };
        if wave.wave_type == WaveType::Square {
            wave.square_duty = self.frnd(0.6);
        }

        wave.start_frequency = 0.2 + self.frnd(0.6);
        wave.slide = -0.3 - self.frnd(0.4);
        wave.attack_time = 0.0;
        wave.sustain_time = self.frnd(0.1);
        wave.decay_time = 0.1 + self.frnd(0.2);
        if self.flip() {
            wave.hpf_cutoff = self.frnd(0.3);
        }

        self.finish(SoundKind::HitHurt.name(), wave)
    }

    /// Jump: a square gliding upward, optionally filtered.
    pub fn generate_jump(&mut self) -> SoundWave {
        let mut wave = self.base_wave();
        wave.wave_type = WaveType::Square;

        wave.square_duty = self.frnd(0.6);
        wave.start_frequency = 0.3 + self.frnd(0.3);
        wave.slide = 0.1 + self.frnd(0.2);
        wave.attack_time = 0.0;
        wave.sustain_time = 0.1 + self.frnd(0.3);
        wave.decay_time = 0.1 + self.frnd(0.2);
        if self.flip() {
            wave.hpf_cutoff = self.frnd(0.3);
        }
        if self.flip() {
            wave.lpf_cutoff = 1.0 - self.frnd(0.6);
        }

        self.finish(SoundKind::Jump.name(), wave)
    }

    /// Menu blip: a short steady square or sawtooth.
    pub fn generate_blip_select(&mut self) -> SoundWave {
        let mut wave = self.base_wave();

        wave.wave_type = if self.flip() {
            WaveType::Sawtooth
        } else {
            WaveType::Square
        };
        if wave.wave_type == WaveType::Square {
            wave.square_duty = self.frnd(0.6);
        }

        wave.start_frequency = 0.2 + self.frnd(0.4);
        wave.attack_time = 0.0;
        wave.sustain_time = 0.1 + self.frnd(0.1);
        wave.decay_time = self.frnd(0.2);
        wave.hpf_cutoff = 0.1;

        self.finish(SoundKind::BlipSelect.name(), wave)
    }
}
