//! Per-sample pitch modulation.
//!
//! - [`pitch`] - Period tracker with slide and the one-shot pitch jump
//! - [`vibrato`] - Sinusoidal period modulation

pub mod pitch;
pub mod vibrato;

pub use pitch::{frequency_to_period, speed_to_samples, Arpeggio, PitchTracker};
pub use vibrato::Vibrato;
