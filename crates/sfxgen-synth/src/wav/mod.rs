//! Deterministic 16-bit mono WAV encoding.
//!
//! Output carries no timestamps or variable metadata, so the same samples
//! always encode to the same bytes. The BLAKE3 hash of the PCM payload is
//! used to compare renders.

mod format;
mod pcm;
mod writer;


pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec, WAV_HEADER_LEN};
