//! sfxgen Parameter Record Library
//!
//! This crate provides the [`SoundWave`] parameter record that fully describes
//! one synthesized sound effect, the legal range of every field, and JSON
//! persistence.
//!
//! # Overview
//!
//! A `SoundWave` is a flat record of normalized values, most in `[0, 1]` or
//! `[-1, 1]`. Out-of-range values are never rejected: [`SoundWave::sanitize`]
//! clamps every field back into its legal range and restores the
//! `min_frequency <= start_frequency` invariant. Every consumer of the record
//! assumes it has been sanitized.
//!
//! # Example
//!
//! ```
//! use sfxgen_spec::{SoundWave, WaveType};
//!
//! let mut wave = SoundWave {
//!     wave_type: WaveType::Sawtooth,
//!     start_frequency: 0.6,
//!     min_frequency: 0.9,
//!     ..SoundWave::default()
//! };
//! wave.sanitize();
//! assert_eq!(wave.min_frequency, 0.6);
//!
//! let json = wave.to_json().unwrap();
//! let loaded = SoundWave::from_json(&json).unwrap();
//! assert_eq!(loaded, wave);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type for persistence
//! - [`ranges`]: Legal ranges and the [`Param`] field enumeration
//! - [`wave`]: The parameter record and waveform kind

pub mod error;
pub mod ranges;
pub mod wave;

// Re-export commonly used types at the crate root
pub use error::{SpecError, SpecResult};
pub use ranges::{Param, ParamRange, DEFAULT_SAMPLE_RATE};
pub use wave::{SoundWave, WaveType};
