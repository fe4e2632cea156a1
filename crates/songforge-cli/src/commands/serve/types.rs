//! Request types and settings for the WebSocket query server.

use serde::{Deserialize, Serialize};
use songforge_backend_music::DEFAULT_MELODY_DURATION;
use songforge_spec::request::seed_serde;
use songforge_spec::{GenerationRequest, Locale};

use crate::commands::json_output::JsonError;

/// Default port for the WebSocket server.
pub const DEFAULT_PORT: u16 = 9123;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Request types supported by the server.
///
/// Seeds may be JSON numbers or decimal strings; either form wraps into
/// range instead of failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServeRequest {
    /// One catalog page: `locale`, `seed`, `page`, `pageSize`, `avgLikes`.
    Page(GenerationRequest),
    /// The review for one song.
    Detail {
        /// Item seed.
        #[serde(with = "seed_serde")]
        seed: u64,
        /// Content locale (optional, default en-US).
        #[serde(default)]
        locale: Locale,
    },
    /// Cover art, returned as base64 PNG.
    Cover {
        /// Item seed.
        #[serde(with = "seed_serde")]
        seed: u64,
        /// Song title drawn on the cover.
        title: String,
        /// Artist name drawn on the cover.
        artist: String,
    },
    /// The melody for one song.
    Melody {
        /// Item seed.
        #[serde(with = "seed_serde")]
        seed: u64,
        /// Nominal length in seconds (optional, default 4).
        #[serde(default = "default_duration")]
        duration: f64,
        /// Whether to include a base64 WAV preview (optional, default false).
        #[serde(default)]
        preview: bool,
    },
}

fn default_duration() -> f64 {
    DEFAULT_MELODY_DURATION
}

impl ServeRequest {
    /// The `type` tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ServeRequest::Page(_) => "page",
            ServeRequest::Detail { .. } => "detail",
            ServeRequest::Cover { .. } => "cover",
            ServeRequest::Melody { .. } => "melody",
        }
    }
}

/// Error response for requests that never reached a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Whether the request succeeded (always false for errors).
    pub success: bool,
    /// Error details.
    pub errors: Vec<JsonError>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: vec![JsonError::new(code, message)],
        }
    }
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    /// Host name or address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
