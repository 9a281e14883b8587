//! Error types for parameter record persistence.

use thiserror::Error;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading or saving a [`crate::SoundWave`].
///
/// Range problems are not errors: they are normalized by
/// [`crate::SoundWave::sanitize`].
#[derive(Debug, Error)]
pub enum SpecError {
    /// The JSON document could not be parsed or produced.
    #[error("sound wave JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Returns a stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::Json(_) => "SPEC_001",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_code_and_message() {
        let err: SpecError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "SPEC_001");
        assert!(err.to_string().starts_with("sound wave JSON error"));
    }
}
