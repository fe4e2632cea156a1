//! Song detail (review) generation.

use songforge_spec::{Locale, SongDetail};

use crate::generator::LexicalGenerator;

/// Paragraphs in a generated review.
pub const REVIEW_PARAGRAPHS: usize = 3;

/// Generates the review for a song from its item seed.
///
/// Uses a fresh generator, so the result never depends on how the song's
/// page was generated.
pub fn generate_detail(locale: Locale, item_seed: u32) -> SongDetail {
    tracing::debug!(locale = %locale, item_seed, "generating song detail");
    let mut text = LexicalGenerator::new(locale, item_seed);
    SongDetail {
        review: text.paragraphs(REVIEW_PARAGRAPHS),
    }
}
