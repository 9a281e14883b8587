//! Tests for the sound generator.

use pretty_assertions::assert_eq;
use sfxgen_spec::{Param, SoundWave, WaveType};

use super::*;

/// Source that always returns the lower bound.
struct FloorSource;

impl RandomSource for FloorSource {
    fn uniform_f64(&mut self, min: f64, _max: f64) -> f64 {
        min
    }

    fn uniform_u32(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn seed_word(&self) -> u32 {
        7
    }
}

fn midpoint_wave() -> SoundWave {
    let mut wave = SoundWave::default();
    for param in Param::ALL {
        *wave.get_mut(param) = 0.5;
    }
    wave
}

// =========================================================================
// Archetypes
// =========================================================================

#[test]
fn test_pickup_coin_distribution() {
    let mut generator = SoundGenerator::new(2024);
    for _ in 0..1000 {
        let wave = generator.generate_pickup_coin();
        assert!((0.4..=0.9).contains(&wave.start_frequency));
        assert_eq!(wave.attack_time, 0.0);
        assert!((0.3..=0.6).contains(&wave.sustain_punch));
    }
}

#[test]
fn test_every_archetype_is_sanitized() {
    let mut generator = SoundGenerator::new(9);
    for kind in SoundKind::ALL {
        for _ in 0..200 {
            let wave = generator.generate(kind);
            assert!(wave.is_sanitized(), "{:?} produced {:?}", kind, wave);
            assert!(wave.min_frequency <= wave.start_frequency);
        }
    }
}

#[test]
fn test_archetype_character() {
    let mut generator = SoundGenerator::new(31);
    for _ in 0..200 {
        assert_eq!(generator.generate_explosion().wave_type, WaveType::Noise);

        let laser = generator.generate_laser_shoot();
        assert!(laser.slide < 0.0);
        assert!(matches!(
            laser.wave_type,
            WaveType::Square | WaveType::Sawtooth | WaveType::Sine
        ));

        let jump = generator.generate_jump();
        assert_eq!(jump.wave_type, WaveType::Square);
        assert!(jump.slide > 0.0);

        assert!(generator.generate_powerup().slide > 0.0);
        assert!(generator.generate_hit_hurt().slide < 0.0);
        assert_eq!(generator.generate_blip_select().hpf_cutoff, 0.1);
    }
}

#[test]
fn test_floor_source_gives_lower_bounds() {
    let mut generator = SoundGenerator::with_source(FloorSource);
    let wave = generator.generate_pickup_coin();
    assert_eq!(wave.start_frequency, 0.4);
    assert_eq!(wave.sustain_time, 0.0);
    assert_eq!(wave.decay_time, 0.1);
    assert_eq!(wave.sustain_punch, 0.3);
    assert_eq!(wave.change_amount, 0.0);
    assert_eq!(wave.random_seed, 7);
}

// =========================================================================
// Determinism and seeding
// =========================================================================

#[test]
fn test_same_seed_same_records() {
    let mut a = SoundGenerator::new(77);
    let mut b = SoundGenerator::new(77);
    for kind in SoundKind::ALL {
        assert_eq!(a.generate(kind), b.generate(kind));
    }
    assert_eq!(a.generate_random(), b.generate_random());
}

#[test]
fn test_different_seeds_differ() {
    let a = SoundGenerator::new(1).generate_random();
    let b = SoundGenerator::new(2).generate_random();
    assert_ne!(a, b);
}

#[test]
fn test_random_seed_is_seed_word_before_draws() {
    let expected = SfxRng::new(5).seed_word();
    let mut generator = SoundGenerator::new(5);
    let first = generator.generate_jump();
    assert_eq!(first.random_seed, expected);

    let second = generator.generate_jump();
    assert_ne!(second.random_seed, first.random_seed);
}

#[test]
fn test_sample_rate_is_stamped_and_sanitized() {
    let wave = SoundGenerator::new(3)
        .with_sample_rate(22050)
        .generate_blip_select();
    assert_eq!(wave.sample_rate, 22050);

    let wave = SoundGenerator::new(3).with_sample_rate(0).generate_blip_select();
    assert_eq!(wave.sample_rate, 44100);
}

// =========================================================================
// Random and mutate
// =========================================================================

#[test]
fn test_generate_random_is_audible_and_sanitized() {
    let mut generator = SoundGenerator::new(11);
    for _ in 0..500 {
        let wave = generator.generate_random();
        assert!(wave.is_sanitized());
        assert!(wave.attack_time + wave.sustain_time + wave.decay_time >= 0.2);
    }
}

#[test]
fn test_mutate_stays_in_range() {
    let mut generator = SoundGenerator::new(12);
    let mut wave = generator.generate_explosion();
    for _ in 0..500 {
        wave = generator.mutate_wave(&wave);
        assert!(wave.is_sanitized());
    }
}

#[test]
fn test_mutate_nudges_about_half_the_fields() {
    let mut generator = SoundGenerator::new(13);
    let original = midpoint_wave();
    let mut changed = 0;
    let trials = 200;

    for _ in 0..trials {
        let mutated = generator.mutate_wave(&original);
        assert_eq!(mutated.wave_type, original.wave_type);
        assert_eq!(mutated.random_seed, original.random_seed);
        assert_eq!(mutated.sample_rate, original.sample_rate);

        for param in Param::ALL {
            let delta = (mutated.get(param) - original.get(param)).abs();
            assert!(delta <= MUTATION_STEP + 1e-12);
            if delta > 0.0 {
                changed += 1;
            }
        }
    }

    let fraction = changed as f64 / (trials * Param::ALL.len()) as f64;
    assert!((0.4..=0.6).contains(&fraction), "fraction {}", fraction);
}

#[test]
fn test_mutate_does_not_touch_input() {
    let mut generator = SoundGenerator::new(14);
    let original = midpoint_wave();
    let copy = original.clone();
    let _ = generator.mutate_wave(&original);
    assert_eq!(original, copy);
}

// =========================================================================
// Kinds and sounds
// =========================================================================

#[test]
fn test_sound_kind_serde_names() {
    for kind in SoundKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.name()));
        let back: SoundKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn test_create_sound_renders_buffer() {
    let wave = SoundGenerator::new(8).generate_powerup();
    let sound = create_sound(&wave);
    let buffer = sound.buffer();
    assert!(!buffer.samples().is_empty());
    assert_eq!(buffer.desc().sample_rate, wave.sample_rate);
    assert_eq!(buffer.desc().frame_count, buffer.samples().len());
}
