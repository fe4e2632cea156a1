//! JSON output types for machine-readable CLI output.
//!
//! Every query command accepts `--json` and prints one [`QueryOutput`]
//! document. The WebSocket server replies with the same documents, so a
//! client can switch between the two without changing its parser.

mod records;

pub use records::{
    CoverOutput, CoverResult, DetailOutput, DetailResult, MelodyOutput, MelodyResult,
    PageOutput, PageResult, QueryOutput,
};

use serde::{Deserialize, Serialize};
use songforge_spec::ValidationError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Validation failures all use [`INVALID_ARGUMENT`]; the underlying `E0xx`
/// code is kept at the start of the message.
pub mod error_codes {
    /// Request argument rejected at the boundary
    pub const INVALID_ARGUMENT: &str = "CLI_001";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Cover could not be encoded as PNG
    pub const COVER_ENCODE: &str = "CLI_003";
    /// Melody preview could not be rendered
    pub const MELODY_RENDER: &str = "CLI_004";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_005";
    /// Request JSON could not be parsed
    pub const REQUEST_PARSE: &str = "CLI_006";
    /// Binary frame was not UTF-8 text
    pub const BINARY_NOT_UTF8: &str = "CLI_007";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request field that was rejected (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Sets the offending field for this error.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Converts a boundary validation failure.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    let json = JsonError::new(error_codes::INVALID_ARGUMENT, error.to_string());
    match &error.field {
        Some(field) => json.with_field(field.clone()),
        None => json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use songforge_spec::ErrorCode;

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("CLI_002", "disk full").with_field("output");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"CLI_002\""));
        assert!(json.contains("\"message\":\"disk full\""));
        assert!(json.contains("\"field\":\"output\""));
    }

    #[test]
    fn test_json_error_optional_field_skipped() {
        let error = JsonError::new("CLI_005", "oops");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("\"field\""));
    }

    #[test]
    fn test_validation_error_keeps_code_and_field() {
        let err = ValidationError::with_field(ErrorCode::InvalidPage, "page must be at least 1", "page");
        let json = validation_error_to_json(&err);
        assert_eq!(json.code, error_codes::INVALID_ARGUMENT);
        assert_eq!(json.message, "E001: page must be at least 1");
        assert_eq!(json.field.as_deref(), Some("page"));
    }
}
