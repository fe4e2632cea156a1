//! Error types for request validation.

use thiserror::Error;

/// Stable codes for request validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Page number must be at least 1
    InvalidPage,
    /// E002: Page size must be at least 1
    InvalidPageSize,
    /// E003: Average likes must be finite and non-negative
    InvalidAvgLikes,
    /// E004: Page size above the serving limit
    PageSizeTooLarge,
    /// E005: Seed text is not a number
    InvalidSeed,
    /// E006: Melody duration must be finite, positive and within the cap
    InvalidDuration,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPage => "E001",
            ErrorCode::InvalidPageSize => "E002",
            ErrorCode::InvalidAvgLikes => "E003",
            ErrorCode::PageSizeTooLarge => "E004",
            ErrorCode::InvalidSeed => "E005",
            ErrorCode::InvalidDuration => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A rejected request argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Name of the offending field, as it appears on the wire.
    pub field: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a new validation error naming the offending field.
    pub fn with_field(code: ErrorCode, message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: Some(field.into()),
        }
    }
}
