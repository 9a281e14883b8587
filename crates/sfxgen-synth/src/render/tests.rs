//! Tests for the renderer.

use sfxgen_spec::{SoundWave, WaveType};

use super::*;
use crate::envelope::stage_length;
use crate::modulation::frequency_to_period;

fn envelope_len(wave: &SoundWave) -> usize {
    (stage_length(wave.attack_time) + stage_length(wave.sustain_time) + stage_length(wave.decay_time))
        as usize
        + 2
}

fn bits(samples: &[f64]) -> Vec<u64> {
    samples.iter().map(|s| s.to_bits()).collect()
}

// =========================================================================
// Length and termination
// =========================================================================

#[test]
fn test_zero_envelope_collapses_immediately() {
    let wave = SoundWave {
        wave_type: WaveType::Sine,
        start_frequency: 0.5,
        attack_time: 0.0,
        sustain_time: 0.0,
        decay_time: 0.0,
        ..SoundWave::default()
    };
    let rendered = render(&wave);
    assert_eq!(rendered.samples.len(), 2);
    assert_eq!(rendered.stop_reason, StopReason::EnvelopeFinished);
}

#[test]
fn test_trim_matches_envelope_length_exactly() {
    for wave in [
        SoundWave::default(),
        SoundWave {
            attack_time: 0.1,
            sustain_time: 0.2,
            decay_time: 0.15,
            wave_type: WaveType::Triangle,
            ..SoundWave::default()
        },
    ] {
        let rendered = render(&wave);
        assert_eq!(rendered.samples.len(), envelope_len(&wave));
        assert_eq!(rendered.stop_reason, StopReason::EnvelopeFinished);
    }
}

#[test]
fn test_falling_pitch_stops_before_envelope() {
    let wave = SoundWave {
        start_frequency: 0.6,
        min_frequency: 0.3,
        slide: -0.5,
        sustain_time: 0.5,
        decay_time: 0.5,
        ..SoundWave::default()
    };
    let rendered = render(&wave);
    assert_eq!(rendered.stop_reason, StopReason::FrequencyOutOfBounds);
    assert!(rendered.samples.len() < envelope_len(&wave));
    assert!(rendered.samples.len() > 1);
}

#[test]
fn test_stop_on_first_sample_leaves_one_silent_sample() {
    let wave = SoundWave {
        start_frequency: 0.5,
        min_frequency: 0.5,
        slide: -1.0,
        ..SoundWave::default()
    };
    let rendered = render(&wave);
    assert_eq!(rendered.stop_reason, StopReason::FrequencyOutOfBounds);
    assert_eq!(rendered.samples, vec![0.0]);
}

#[test]
fn test_length_cap() {
    let wave = SoundWave {
        attack_time: 1.0,
        sustain_time: 1.0,
        decay_time: 1.0,
        sample_rate: 8000,
        ..SoundWave::default()
    };
    let rendered = render(&wave);
    assert_eq!(rendered.stop_reason, StopReason::LengthCap);
    assert_eq!(rendered.samples.len(), 8000 * MAX_LENGTH_SECONDS);
}

// =========================================================================
// Sample values
// =========================================================================

#[test]
fn test_samples_are_bounded_for_every_waveform() {
    for wave_type in WaveType::ALL {
        let wave = SoundWave {
            wave_type,
            sustain_punch: 1.0,
            phaser_offset: 0.3,
            lpf_cutoff: 0.7,
            lpf_resonance: 1.0,
            hpf_cutoff: 0.2,
            vibrato_depth: 1.0,
            vibrato_speed: 0.5,
            random_seed: 17,
            ..SoundWave::default()
        };
        let rendered = render(&wave);
        assert!(!rendered.samples.is_empty());
        for &s in &rendered.samples {
            assert!((-1.0..=1.0).contains(&s), "{:?} produced {}", wave_type, s);
        }
        assert!(rendered.samples.iter().any(|&s| s != 0.0));
    }
}

#[test]
fn test_unsanitized_input_is_normalized() {
    let wave = SoundWave {
        start_frequency: 4.0,
        decay_time: -1.0,
        sustain_time: f64::NAN,
        sample_rate: 0,
        ..SoundWave::default()
    };
    let rendered = render(&wave);
    assert_eq!(rendered.sample_rate, 44100);
    assert_eq!(rendered.samples.len(), envelope_len(&wave.clone().sanitized()));
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn test_render_is_deterministic() {
    let wave = SoundWave {
        wave_type: WaveType::Noise,
        random_seed: 1234,
        repeat_speed: 0.6,
        phaser_offset: -0.2,
        phaser_sweep: 0.1,
        ..SoundWave::default()
    };
    assert_eq!(bits(&render(&wave).samples), bits(&render(&wave).samples));
}

#[test]
fn test_noise_seed_changes_output() {
    let wave = |seed| SoundWave {
        wave_type: WaveType::Noise,
        random_seed: seed,
        ..SoundWave::default()
    };
    assert_ne!(bits(&render(&wave(1)).samples), bits(&render(&wave(2)).samples));
}

#[test]
fn test_seed_does_not_affect_tonal_waves() {
    let wave = |seed| SoundWave {
        wave_type: WaveType::Sawtooth,
        random_seed: seed,
        ..SoundWave::default()
    };
    assert_eq!(bits(&render(&wave(1)).samples), bits(&render(&wave(2)).samples));
}

// =========================================================================
// Repeat
// =========================================================================

#[test]
fn test_no_repeat_keeps_pitch_monotonic() {
    let wave = SoundWave {
        slide: -0.3,
        sustain_time: 0.4,
        ..SoundWave::default()
    };
    let mut voice = Voice::new(&wave);
    let mut last = 0.0;
    while voice.next_sample().is_ok() {
        let period = voice.pitch.period();
        assert!(period >= last);
        last = period;
    }
}

#[test]
fn test_repeat_resets_pitch_but_not_envelope() {
    let wave = SoundWave {
        slide: -0.3,
        sustain_time: 0.4,
        repeat_speed: 0.5,
        ..SoundWave::default()
    };
    let limit = speed_to_samples(wave.repeat_speed) as usize;
    let start = frequency_to_period(wave.start_frequency);

    let mut voice = Voice::new(&wave);
    let mut periods = Vec::new();
    while voice.next_sample().is_ok() {
        periods.push(voice.pitch.period());
    }

    assert!(periods[limit - 2] > periods[limit - 1]);
    assert!((periods[limit - 1] - start).abs() < start * 0.01);
    assert_eq!(periods.len(), envelope_len(&wave));
}

// =========================================================================
// Buffer packaging
// =========================================================================

#[test]
fn test_create_buffer_metadata() {
    let wave = SoundWave {
        sample_rate: 22050,
        ..SoundWave::default()
    };
    let buffer = create_buffer(&wave);
    assert_eq!(buffer.desc().channel_count, 1);
    assert_eq!(buffer.desc().sample_rate, 22050);
    assert_eq!(buffer.desc().frame_count, buffer.samples().len());
    assert_eq!(buffer.samples().len(), envelope_len(&wave));
}
