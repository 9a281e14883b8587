//! sfxgen Synthesizer
//!
//! This crate renders [`SoundWave`](sfxgen_spec::SoundWave) parameter records
//! into mono PCM and generates new records from archetype distributions.
//!
//! # Overview
//!
//! Rendering runs a small fixed signal chain once per output sample:
//!
//! - **Oscillator** - Square (with duty sweep), sawtooth, sine, noise, triangle
//! - **Pitch** - Slide, delta slide, one-shot pitch jump, vibrato, repeat
//! - **Filters** - Resonant low-pass and one-pole high-pass, both sweepable
//! - **Phaser** - Sweeping comb over a 1024-sample delay line
//! - **Envelope** - Attack, sustain with punch, linear decay
//!
//! Each output sample averages eight oscillator sub-samples. A note ends when
//! its envelope completes, when the pitch falls below a nonzero floor, or
//! after ten seconds.
//!
//! # Determinism
//!
//! Rendering is a pure function of the record. The noise oscillator draws from
//! a PCG32 seeded with the record's `random_seed`, and the generator draws from
//! a caller-owned [`RandomSource`]. There is no global random state.
//!
//! # Example
//!
//! ```
//! use sfxgen_synth::{create_sound, SoundGenerator};
//!
//! let mut generator = SoundGenerator::new(7);
//! let wave = generator.generate_laser_shoot();
//! let sound = create_sound(&wave);
//!
//! let wav = sound.to_wav();
//! assert_eq!(&wav[0..4], b"RIFF");
//! println!("PCM hash: {}", sound.pcm_hash());
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] - Renders a record and reports why it stopped
//! - [`generator`] - Archetype, random and mutation factories
//! - [`envelope`] - Attack/sustain/decay envelope
//! - [`filter`] - Low-pass and high-pass filter pair
//! - [`effects`] - Phaser and its delay line
//! - [`modulation`] - Pitch tracking and vibrato
//! - [`oscillator`] - Waveform shapes
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`sound`] - PCM buffers and the playable sound handle
//! - [`wav`] - Deterministic WAV writer

pub mod effects;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod generator;
pub mod modulation;
pub mod noise;
pub mod oscillator;
pub mod render;
pub mod rng;
pub mod sound;
pub mod wav;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use generator::{create_sound, SoundGenerator, SoundKind};
pub use render::{create_buffer, render, Rendered, StopReason};
pub use rng::{RandomSource, SfxRng};
pub use sound::{BufferDesc, Sound, SoundBuffer};
