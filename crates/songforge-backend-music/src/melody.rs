//! Melody generation.
//!
//! A Mulberry32 stream seeded with the item seed picks one of three scales,
//! then one scale degree for each of sixteen evenly spaced notes.

use songforge_spec::{Melody, MelodyNote, Mulberry32, ScaleKind};

/// Nominal melody length in seconds when the caller does not choose one.
pub const DEFAULT_MELODY_DURATION: f64 = 4.0;
/// Notes in every melody.
pub const NOTES_PER_MELODY: usize = 16;
/// Seconds between note onsets.
pub const NOTE_SPACING: f64 = 0.25;
/// Length of every note in seconds.
pub const NOTE_LENGTH: f64 = 0.2;

const C_MAJOR: [&str; 8] = ["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"];
const A_MINOR: [&str; 8] = ["A3", "B3", "C4", "D4", "E4", "F4", "G4", "A4"];
const D_MAJOR: [&str; 8] = ["D4", "E4", "F#4", "G4", "A4", "B4", "C#5", "D5"];

/// The eight pitches of a scale, lowest first.
pub fn scale_pitches(scale: ScaleKind) -> &'static [&'static str; 8] {
    match scale {
        ScaleKind::CMajor => &C_MAJOR,
        ScaleKind::AMinor => &A_MINOR,
        ScaleKind::DMajor => &D_MAJOR,
    }
}

/// Generates the melody for an item seed.
///
/// The note sequence depends only on `item_seed`; `duration` is carried
/// through as the melody's nominal length.
pub fn generate_melody(item_seed: u32, duration: f64) -> Melody {
    let mut rng = Mulberry32::new(item_seed);
    let scale = ScaleKind::ALL[rng.next_index(ScaleKind::ALL.len())];
    let pitches = scale_pitches(scale);

    let notes = (0..NOTES_PER_MELODY)
        .map(|k| MelodyNote {
            pitch: pitches[rng.next_index(pitches.len())].to_string(),
            start_time: NOTE_SPACING * k as f64,
            duration: NOTE_LENGTH,
        })
        .collect();

    tracing::debug!(item_seed, scale = %scale, "generated melody");

    Melody {
        scale,
        notes,
        total_duration: duration,
    }
}

/// Generates a melody with [`DEFAULT_MELODY_DURATION`].
pub fn generate_default_melody(item_seed: u32) -> Melody {
    generate_melody(item_seed, DEFAULT_MELODY_DURATION)
}
