//! Byte renderings of generated content, for determinism checks.
//!
//! Pages are generated with `avg_likes == 0`, which pins the like count to
//! zero and leaves every field reproducible.

use songforge_backend_catalog::{generate_detail, generate_page};
use songforge_backend_music::{generate_default_melody, render_preview_wav, MelodyResult};
use songforge_backend_texture::{render_cover, CoverError, CoverPlan};
use songforge_spec::{Locale, SongSummary};

/// User seeds worth covering: zero, small, 32-bit edges and 64-bit edges.
pub const SAMPLE_SEEDS: [u64; 7] = [
    0,
    1,
    42,
    u32::MAX as u64,
    u32::MAX as u64 + 1,
    i64::MAX as u64,
    u64::MAX,
];

/// One tab-separated line per song.
pub fn song_line(song: &SongSummary) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
        song.index, song.title, song.artist, song.album, song.genre, song.likes, song.item_seed
    )
}

/// A reproducible page rendering.
pub fn page_bytes(locale: Locale, user_seed: u64, page: u64, page_size: u32) -> Vec<u8> {
    generate_page(locale, user_seed, page, page_size, 0.0)
        .iter()
        .map(song_line)
        .collect::<String>()
        .into_bytes()
}

/// Review text bytes.
pub fn review_bytes(locale: Locale, item_seed: u32) -> Vec<u8> {
    generate_detail(locale, item_seed).review.into_bytes()
}

/// The cover draw sequence: hues, then one line per circle.
pub fn cover_plan_bytes(item_seed: u32) -> Vec<u8> {
    let plan = CoverPlan::from_seed(item_seed);
    let mut text = format!("{} {}\n", plan.hue1, plan.hue2);
    for c in &plan.circles {
        text.push_str(&format!("{} {} {} {}\n", c.x, c.y, c.radius, c.lightness));
    }
    text.into_bytes()
}

/// Encoded cover PNG.
pub fn cover_png(title: &str, artist: &str, item_seed: u32) -> Result<Vec<u8>, CoverError> {
    render_cover(title, artist, item_seed).to_png().map(|png| png.data)
}

/// The default melody as one `pitch@start/duration` line per note.
pub fn melody_bytes(item_seed: u32) -> Vec<u8> {
    let melody = generate_default_melody(item_seed);
    let mut text = format!("{}\n", melody.scale);
    for note in &melody.notes {
        text.push_str(&format!("{}@{}/{}\n", note.pitch, note.start_time, note.duration));
    }
    text.into_bytes()
}

/// The default melody's WAV preview.
pub fn preview_wav(item_seed: u32) -> MelodyResult<Vec<u8>> {
    render_preview_wav(&generate_default_melody(item_seed)).map(|wav| wav.wav_data)
}
