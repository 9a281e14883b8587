//! Integration tests for archetype generation and rendering.

use std::collections::HashSet;

use sfxgen_spec::SoundWave;
use sfxgen_synth::{create_sound, SoundGenerator, SoundKind};

#[test]
fn test_every_archetype_renders_audible_sound() {
    let mut generator = SoundGenerator::new(1);
    for kind in SoundKind::ALL {
        for _ in 0..10 {
            let wave = generator.generate(kind);
            let sound = create_sound(&wave);
            let samples = sound.buffer().samples();
            assert!(!samples.is_empty(), "{:?}", kind);
            assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        }
    }
}

#[test]
fn test_archetype_sounds_are_reproducible_from_seed() {
    for kind in SoundKind::ALL {
        let first = create_sound(&SoundGenerator::new(600).generate(kind));
        let second = create_sound(&SoundGenerator::new(600).generate(kind));
        assert_eq!(first.pcm_hash(), second.pcm_hash(), "{:?}", kind);
    }
}

#[test]
fn test_repeated_draws_vary() {
    let mut generator = SoundGenerator::new(2);
    let hashes: HashSet<String> = (0..20)
        .map(|_| create_sound(&generator.generate_laser_shoot()).pcm_hash())
        .collect();
    assert!(hashes.len() > 15);
}

#[test]
fn test_generated_records_survive_json() {
    let mut generator = SoundGenerator::new(3);
    for kind in SoundKind::ALL {
        let wave = generator.generate(kind);
        let json = wave.to_json_pretty().unwrap();
        let loaded = SoundWave::from_json(&json).unwrap();
        assert_eq!(loaded, wave);
    }
}

#[test]
fn test_mutation_chain_stays_renderable() {
    let mut generator = SoundGenerator::new(4);
    let mut wave = generator.generate_random();
    for _ in 0..25 {
        wave = generator.mutate_wave(&wave);
        assert!(wave.is_sanitized());
        assert!(!create_sound(&wave).buffer().samples().is_empty());
    }
}
