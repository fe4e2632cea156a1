//! Output record types for the query commands (page, detail, cover, melody).

use serde::{Deserialize, Serialize};
use songforge_spec::{Locale, Melody, SongSummary};

use super::JsonError;

/// Envelope shared by every query command and server reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutput<T> {
    /// Whether the query succeeded
    pub success: bool,
    /// Errors encountered (empty on success)
    pub errors: Vec<JsonError>,
    /// Query result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> QueryOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Creates a failed output with a single error.
    pub fn error(error: JsonError) -> Self {
        Self::failure(vec![error])
    }
}

/// JSON output for the `page` command.
pub type PageOutput = QueryOutput<PageResult>;
/// JSON output for the `detail` command.
pub type DetailOutput = QueryOutput<DetailResult>;
/// JSON output for the `cover` command.
pub type CoverOutput = QueryOutput<CoverResult>;
/// JSON output for the `melody` command.
pub type MelodyOutput = QueryOutput<MelodyResult>;

/// One generated catalog page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Locale the page was generated in (after fallback)
    pub locale: Locale,
    /// User seed, normalized to u64
    pub seed: u64,
    /// 1-based page number
    pub page: u64,
    /// Songs per page
    pub page_size: u32,
    /// Songs in index order
    pub songs: Vec<SongSummary>,
}

/// Expanded information for one song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResult {
    /// Locale the review was generated in
    pub locale: Locale,
    /// Item seed
    pub seed: u32,
    /// Review paragraphs joined by newlines
    pub review: String,
}

/// A rendered cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverResult {
    /// Item seed
    pub seed: u32,
    /// Gradient start hue in degrees
    pub hue1: u32,
    /// Gradient end hue in degrees
    pub hue2: u32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
    /// Path the PNG was written to (CLI)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Base64-encoded PNG bytes (server)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// A generated melody and, optionally, its rendered preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MelodyResult {
    /// Item seed
    pub seed: u32,
    /// The note sequence
    pub melody: Melody,
    /// Path the WAV preview was written to (CLI)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wav: Option<String>,
    /// BLAKE3 hash of the preview PCM data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Base64-encoded WAV bytes (server)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}
