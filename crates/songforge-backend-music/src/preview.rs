//! Offline melody preview.
//!
//! [`PreviewRenderer`] is a [`NoteScheduler`] that mixes each scheduled note
//! into a mono buffer as a triangle wave shaped by an ADSR envelope. The note
//! sounds for its duration, then the envelope releases.

use songforge_spec::{Melody, MAX_MELODY_DURATION};

use crate::envelope::{AdsrEnvelope, AdsrParams};
use crate::error::{MelodyError, MelodyResult};
use crate::oscillator::{triangle, PhaseAccumulator};
use crate::playback::{schedule_melody, NoteEvent, NoteScheduler};
use crate::wav::WavResult;

/// Sample rate for previews.
pub const PREVIEW_SAMPLE_RATE: u32 = 22050;
/// Per-voice gain; leaves headroom for overlapping release tails.
const VOICE_GAIN: f64 = 0.5;

/// Mixes scheduled notes into a sample buffer.
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    sample_rate: u32,
    envelope: AdsrParams,
    samples: Vec<f64>,
}

impl PreviewRenderer {
    /// Creates a renderer with the default voice.
    pub fn new(sample_rate: u32) -> MelodyResult<Self> {
        if sample_rate == 0 {
            return Err(MelodyError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            sample_rate,
            envelope: AdsrParams::default(),
            samples: Vec::new(),
        })
    }

    /// Replaces the voice envelope.
    pub fn with_envelope(mut self, envelope: AdsrParams) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Mixed samples so far.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Render a whole melody, padded to at least its nominal duration.
    ///
    /// The nominal duration and every note must end within
    /// [`MAX_MELODY_DURATION`] seconds.
    pub fn render(mut self, melody: &Melody) -> MelodyResult<Vec<f64>> {
        check_span(melody.total_duration)?;
        for note in &melody.notes {
            if note.start_time < 0.0 || note.duration < 0.0 {
                return Err(MelodyError::InvalidDuration {
                    duration: note.start_time.min(note.duration),
                });
            }
            check_span(note.start_time + note.duration)?;
        }
        schedule_melody(melody, &mut self)?;
        let nominal = self.seconds_to_samples(melody.total_duration);
        if self.samples.len() < nominal {
            self.samples.resize(nominal, 0.0);
        }
        Ok(self.samples)
    }

    fn seconds_to_samples(&self, seconds: f64) -> usize {
        (seconds.max(0.0) * self.sample_rate as f64).round() as usize
    }
}

fn check_span(seconds: f64) -> MelodyResult<()> {
    if !seconds.is_finite() || !(0.0..=MAX_MELODY_DURATION).contains(&seconds) {
        return Err(MelodyError::InvalidDuration { duration: seconds });
    }
    Ok(())
}

impl NoteScheduler for PreviewRenderer {
    fn schedule(&mut self, event: &NoteEvent) {
        let rate = self.sample_rate as f64;
        let start = self.seconds_to_samples(event.start_time);
        let gate = self.seconds_to_samples(event.duration);
        let tail = self.seconds_to_samples(self.envelope.release);
        let end = start + gate + tail + 1;
        if self.samples.len() < end {
            self.samples.resize(end, 0.0);
        }

        let mut envelope = AdsrEnvelope::new(self.envelope, rate);
        let mut phase = PhaseAccumulator::new(rate);
        for (i, slot) in self.samples[start..end].iter_mut().enumerate() {
            if i == gate {
                envelope.release();
            }
            let level = envelope.next_sample();
            let p = phase.advance(event.frequency);
            *slot += triangle(p) * level * VOICE_GAIN;
            if envelope.is_idle() {
                break;
            }
        }
    }
}

/// Render a melody to a 16-bit mono WAV at [`PREVIEW_SAMPLE_RATE`].
pub fn render_preview_wav(melody: &Melody) -> MelodyResult<WavResult> {
    let samples = PreviewRenderer::new(PREVIEW_SAMPLE_RATE)?.render(melody)?;
    tracing::debug!(samples = samples.len(), "rendered melody preview");
    WavResult::from_mono(&samples, PREVIEW_SAMPLE_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melody::{generate_default_melody, generate_melody};

    #[test]
    fn test_preview_length_covers_release() {
        let melody = generate_default_melody(42);
        let samples = PreviewRenderer::new(PREVIEW_SAMPLE_RATE)
            .unwrap()
            .render(&melody)
            .unwrap();
        // Last note ends at 3.95s, plus a 0.5s release.
        let min = (4.45 * PREVIEW_SAMPLE_RATE as f64) as usize;
        assert!(samples.len() >= min, "{} < {}", samples.len(), min);
        assert!(samples.iter().all(|s| s.abs() <= 1.0));
        assert!(samples.iter().any(|s| s.abs() > 0.1));
    }

    #[test]
    fn test_long_nominal_duration_pads_with_silence() {
        let melody = generate_melody(3, 10.0);
        let samples = PreviewRenderer::new(1000).unwrap().render(&melody).unwrap();
        assert_eq!(samples.len(), 10_000);
        assert!(samples[6000..].iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_preview_wav_is_deterministic() {
        let melody = generate_default_melody(1234);
        let a = render_preview_wav(&melody).unwrap();
        let b = render_preview_wav(&melody).unwrap();
        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_eq!(a.wav_data, b.wav_data);
        assert_eq!(a.sample_rate, PREVIEW_SAMPLE_RATE);
    }

    #[test]
    fn test_different_melodies_differ() {
        let a = render_preview_wav(&generate_default_melody(1)).unwrap();
        let b = render_preview_wav(&generate_default_melody(2)).unwrap();
        assert_ne!(a.pcm_hash, b.pcm_hash);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            PreviewRenderer::new(0),
            Err(MelodyError::InvalidSampleRate { rate: 0 })
        ));
        let mut melody = generate_default_melody(1);
        melody.total_duration = f64::NAN;
        assert!(matches!(
            render_preview_wav(&melody),
            Err(MelodyError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_rejects_durations_past_cap() {
        for duration in [MAX_MELODY_DURATION + 1.0, 1e6, 1e300] {
            let melody = generate_melody(1, duration);
            assert!(matches!(
                render_preview_wav(&melody),
                Err(MelodyError::InvalidDuration { .. })
            ));
        }
        assert!(render_preview_wav(&generate_melody(1, MAX_MELODY_DURATION)).is_ok());
    }

    #[test]
    fn test_rejects_notes_past_cap() {
        let mut melody = generate_default_melody(5);
        melody.notes[3].start_time = 1e9;
        assert!(matches!(
            PreviewRenderer::new(PREVIEW_SAMPLE_RATE).unwrap().render(&melody),
            Err(MelodyError::InvalidDuration { .. })
        ));
        melody.notes[3].start_time = -1.0;
        assert!(render_preview_wav(&melody).is_err());
    }

    #[test]
    fn test_silence_before_first_note_offset() {
        let mut renderer = PreviewRenderer::new(1000).unwrap();
        renderer.schedule(&NoteEvent {
            pitch: "A4".to_string(),
            midi: 69,
            frequency: 440.0,
            start_time: 0.5,
            duration: 0.1,
        });
        let samples = renderer.samples();
        assert!(samples[..500].iter().all(|s| *s == 0.0));
        assert!(samples[500..700].iter().any(|s| *s != 0.0));
    }
}
