//! Delay-based effects.

pub mod delay_line;
pub mod phaser;

pub use delay_line::DelayLine;
pub use phaser::{Phaser, PHASER_LENGTH};
