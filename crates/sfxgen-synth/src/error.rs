//! Error types for the synthesizer.
//!
//! Rendering and generation never fail. These errors only come from the
//! edges: loading records, building buffers, and writing WAV data.

use sfxgen_spec::SpecError;
use thiserror::Error;

/// Result type for synthesizer operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur at the synthesizer's I/O edges.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Parameter record could not be loaded or saved.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Buffer descriptor does not describe the supplied samples.
    #[error("invalid buffer: {message}")]
    InvalidBuffer {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an invalid buffer error.
    pub fn invalid_buffer(message: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            message: message.into(),
        }
    }

    /// Returns a stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::Spec(err) => err.code(),
            SynthError::InvalidBuffer { .. } => "SYNTH_001",
            SynthError::Io(_) => "SYNTH_002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_buffer_helper() {
        let err = SynthError::invalid_buffer("frame count 3 does not match 4 samples");
        assert!(err.to_string().contains("frame count 3"));
        assert_eq!(err.code(), "SYNTH_001");
    }

    #[test]
    fn test_spec_error_passes_code_through() {
        let err: SynthError = sfxgen_spec::SoundWave::from_json("[").unwrap_err().into();
        assert_eq!(err.code(), "SPEC_001");
    }
}
