//! Error types for the music backend.

use thiserror::Error;

/// Result type for music operations.
pub type MelodyResult<T> = Result<T, MelodyError>;

/// Errors that can occur while scheduling or rendering a melody.
#[derive(Debug, Error)]
pub enum MelodyError {
    /// A pitch name could not be parsed.
    #[error("invalid note name: '{name}'")]
    InvalidNote {
        /// The offending name.
        name: String,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// PCM payload too large for a RIFF header.
    #[error("PCM data of {bytes} bytes does not fit in a WAV file")]
    WavTooLarge {
        /// Payload size in bytes.
        bytes: usize,
    },
}

impl MelodyError {
    /// Creates an invalid note error.
    pub fn invalid_note(name: impl Into<String>) -> Self {
        Self::InvalidNote { name: name.into() }
    }
}
