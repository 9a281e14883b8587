#![no_main]

use libfuzzer_sys::fuzz_target;
use sfxgen_spec::SoundWave;
use sfxgen_synth::render::MAX_LENGTH_SECONDS;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(wave) = SoundWave::from_json(text) else {
        return;
    };

    assert!(wave.is_sanitized());
    assert_eq!(wave.clone().sanitized(), wave);

    let rendered = sfxgen_synth::render(&wave);
    let cap = wave.sample_rate as usize * MAX_LENGTH_SECONDS;
    assert!(!rendered.samples.is_empty());
    assert!(rendered.samples.len() <= cap);
    assert!(rendered.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
});
