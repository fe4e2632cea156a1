//! Generated value types.
//!
//! Every type here is a pure value computed on demand; nothing is stored.
//! Field names on the wire match the JSON records served to web clients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of a generated catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSummary {
    /// 1-based position in the whole catalog: `(page - 1) * page_size + slot + 1`.
    pub index: u64,
    /// Song title.
    pub title: String,
    /// Band or performer name.
    pub artist: String,
    /// Album name, or "Single".
    pub album: String,
    /// Genre from the locale's fixed vocabulary.
    pub genre: String,
    /// Like count. The only field that is not reproducible.
    pub likes: u64,
    /// Seed that regenerates this song's review, cover and melody.
    #[serde(rename = "seed")]
    pub item_seed: u32,
}

impl SongSummary {
    /// Whether this song was generated as a single rather than an album track.
    pub fn is_single(&self) -> bool {
        self.album == SINGLE_ALBUM
    }
}

/// Album text used for songs released as singles.
pub const SINGLE_ALBUM: &str = "Single";

/// Expanded song information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDetail {
    /// Review text, paragraphs separated by `\n`.
    pub review: String,
}

impl SongDetail {
    /// Iterate over the review paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.review.split('\n')
    }
}

/// One of the fixed scales a melody is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    /// C major, C4 to C5.
    CMajor,
    /// A natural minor, A3 to A4.
    AMinor,
    /// D major, D4 to D5.
    DMajor,
}

impl ScaleKind {
    /// Scales in draw order: a seeded index selects into this table.
    pub const ALL: [ScaleKind; 3] = [ScaleKind::CMajor, ScaleKind::AMinor, ScaleKind::DMajor];

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScaleKind::CMajor => "C major",
            ScaleKind::AMinor => "A minor",
            ScaleKind::DMajor => "D major",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single timed note event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyNote {
    /// Scientific pitch name, e.g. "F#4".
    #[serde(rename = "note")]
    pub pitch: String,
    /// Start time in seconds.
    #[serde(rename = "time")]
    pub start_time: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// A short deterministic melody.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Melody {
    /// Scale the pitches were drawn from.
    pub scale: ScaleKind,
    /// Notes in start-time order.
    pub notes: Vec<MelodyNote>,
    /// Nominal playback length in seconds.
    #[serde(rename = "duration")]
    pub total_duration: f64,
}

impl Melody {
    /// Time at which the last note stops sounding.
    pub fn end_time(&self) -> f64 {
        self.notes
            .iter()
            .map(|n| n.start_time + n.duration)
            .fold(0.0, f64::max)
    }
}
