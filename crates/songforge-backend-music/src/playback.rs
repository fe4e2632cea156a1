//! Playback surface.
//!
//! Melody generation ends at a note list. Anything that can play pitched,
//! timed notes implements [`NoteScheduler`]; [`schedule_melody`] resolves
//! pitches and hands each note over in start-time order.

use songforge_spec::Melody;

use crate::error::{MelodyError, MelodyResult};
use crate::note::{midi_to_freq, note_name_to_midi};

/// One note as handed to a scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteEvent {
    /// Scientific pitch name.
    pub pitch: String,
    /// MIDI note number.
    pub midi: u8,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Start time in seconds.
    pub start_time: f64,
    /// Length in seconds.
    pub duration: f64,
}

/// Something that can schedule pitched, timed notes.
pub trait NoteScheduler {
    /// Schedule a single note.
    fn schedule(&mut self, event: &NoteEvent);
}

/// Collecting notes into a list is the simplest scheduler.
impl NoteScheduler for Vec<NoteEvent> {
    fn schedule(&mut self, event: &NoteEvent) {
        self.push(event.clone());
    }
}

/// Resolve every note of a melody to a [`NoteEvent`].
pub fn note_events(melody: &Melody) -> MelodyResult<Vec<NoteEvent>> {
    melody
        .notes
        .iter()
        .map(|note| {
            let midi = note_name_to_midi(&note.pitch)
                .ok_or_else(|| MelodyError::invalid_note(&note.pitch))?;
            Ok(NoteEvent {
                pitch: note.pitch.clone(),
                midi,
                frequency: midi_to_freq(midi),
                start_time: note.start_time,
                duration: note.duration,
            })
        })
        .collect()
}

/// Schedule a whole melody. Returns the number of notes scheduled.
///
/// Pitches are resolved before anything is scheduled, so a bad pitch
/// leaves the scheduler untouched.
pub fn schedule_melody<S: NoteScheduler + ?Sized>(
    melody: &Melody,
    scheduler: &mut S,
) -> MelodyResult<usize> {
    let events = note_events(melody)?;
    for event in &events {
        scheduler.schedule(event);
    }
    Ok(events.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melody::generate_default_melody;
    use songforge_spec::{MelodyNote, ScaleKind};

    #[test]
    fn test_schedule_melody_collects_all_notes() {
        let melody = generate_default_melody(42);
        let mut events: Vec<NoteEvent> = Vec::new();
        let count = schedule_melody(&melody, &mut events).unwrap();

        assert_eq!(count, 16);
        assert_eq!(events.len(), 16);
        for (event, note) in events.iter().zip(&melody.notes) {
            assert_eq!(event.pitch, note.pitch);
            assert_eq!(event.start_time, note.start_time);
            assert!(event.frequency > 200.0 && event.frequency < 600.0);
        }
    }

    #[test]
    fn test_bad_pitch_schedules_nothing() {
        let melody = Melody {
            scale: ScaleKind::CMajor,
            notes: vec![
                MelodyNote {
                    pitch: "C4".to_string(),
                    start_time: 0.0,
                    duration: 0.2,
                },
                MelodyNote {
                    pitch: "nope".to_string(),
                    start_time: 0.25,
                    duration: 0.2,
                },
            ],
            total_duration: 1.0,
        };
        let mut events: Vec<NoteEvent> = Vec::new();
        let err = schedule_melody(&melody, &mut events).unwrap_err();
        assert!(matches!(err, MelodyError::InvalidNote { ref name } if name == "nope"));
        assert!(events.is_empty());
    }
}
