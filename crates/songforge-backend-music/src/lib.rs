//! Songforge Music Backend
//!
//! Deterministic melodies for catalog songs. A melody is a scale choice and
//! sixteen notes drawn from a Mulberry32 stream seeded with the item seed.
//! Playing it is a separate concern: any [`NoteScheduler`] can receive the
//! notes, and [`PreviewRenderer`] renders them offline to a WAV preview.
//!
//! ```
//! use songforge_backend_music::{generate_melody, DEFAULT_MELODY_DURATION};
//! use songforge_spec::ScaleKind;
//!
//! let melody = generate_melody(42, DEFAULT_MELODY_DURATION);
//! assert_eq!(melody.scale, ScaleKind::AMinor);
//! assert_eq!(melody.notes.len(), 16);
//! ```

pub mod envelope;
pub mod error;
pub mod melody;
pub mod note;
pub mod oscillator;
pub mod playback;
pub mod preview;
pub mod wav;

pub use envelope::{AdsrEnvelope, AdsrParams};
pub use error::{MelodyError, MelodyResult};
pub use melody::{
    generate_default_melody, generate_melody, scale_pitches, DEFAULT_MELODY_DURATION,
    NOTES_PER_MELODY,
};
pub use note::{midi_to_freq, note_name_to_freq, note_name_to_midi};
pub use playback::{note_events, schedule_melody, NoteEvent, NoteScheduler};
pub use preview::{render_preview_wav, PreviewRenderer, PREVIEW_SAMPLE_RATE};
pub use wav::{compute_pcm_hash, WavResult};
