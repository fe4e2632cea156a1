//! Note name, MIDI number and frequency conversion.

/// Semitone offsets for note names (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
const SEMITONE_MAP: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// MIDI number of A4.
pub const A4_MIDI: u8 = 69;
/// Concert pitch for A4 in Hz.
pub const A4_FREQ: f64 = 440.0;

/// Parse a scientific pitch name into (semitone, octave).
///
/// Accepts a letter, an optional `#` or `b`, and a (possibly negative)
/// octave: "C4", "F#4", "Bb3", "C-1".
pub fn parse_note_name(name: &str) -> Option<(i32, i32)> {
    let mut chars = name.trim().chars().peekable();

    let letter = chars.next()?.to_ascii_uppercase();
    let mut semitone = SEMITONE_MAP
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, s)| *s)?;

    match chars.peek() {
        Some('#') => {
            chars.next();
            semitone += 1;
        }
        Some('b') => {
            chars.next();
            semitone -= 1;
        }
        _ => {}
    }

    let octave_str: String = chars.collect();
    let octave: i32 = octave_str.parse().ok()?;
    Some((semitone, octave))
}

/// Convert a note name to a MIDI note number (C4 = 60).
///
/// Returns `None` for unparseable names or notes outside 0..=127.
///
/// # Examples
/// ```
/// use songforge_backend_music::note::note_name_to_midi;
///
/// assert_eq!(note_name_to_midi("C4"), Some(60));
/// assert_eq!(note_name_to_midi("F#4"), Some(66));
/// assert_eq!(note_name_to_midi("A3"), Some(57));
/// assert_eq!(note_name_to_midi("H2"), None);
/// ```
pub fn note_name_to_midi(name: &str) -> Option<u8> {
    let (semitone, octave) = parse_note_name(name)?;
    let midi = (octave + 1) * 12 + semitone;
    u8::try_from(midi).ok().filter(|m| *m <= 127)
}

/// Convert a MIDI note number to frequency in Hz.
///
/// Uses the standard formula: f = 440 * 2^((n-69)/12)
///
/// # Examples
/// ```
/// use songforge_backend_music::note::midi_to_freq;
///
/// let a4 = midi_to_freq(69);
/// assert!((a4 - 440.0).abs() < 0.001);
///
/// let c4 = midi_to_freq(60);
/// assert!((c4 - 261.626).abs() < 0.01);
/// ```
pub fn midi_to_freq(midi_note: u8) -> f64 {
    A4_FREQ * 2.0_f64.powf((midi_note as f64 - A4_MIDI as f64) / 12.0)
}

/// Convert a note name straight to its frequency.
pub fn note_name_to_freq(name: &str) -> Option<f64> {
    note_name_to_midi(name).map(midi_to_freq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_name() {
        assert_eq!(parse_note_name("C4"), Some((0, 4)));
        assert_eq!(parse_note_name("C#5"), Some((1, 5)));
        assert_eq!(parse_note_name("Bb3"), Some((10, 3)));
        assert_eq!(parse_note_name("c-1"), Some((0, -1)));
        assert_eq!(parse_note_name(""), None);
        assert_eq!(parse_note_name("C"), None);
        assert_eq!(parse_note_name("X4"), None);
    }

    #[test]
    fn test_scale_pitches_to_midi() {
        assert_eq!(note_name_to_midi("A3"), Some(57));
        assert_eq!(note_name_to_midi("B3"), Some(59));
        assert_eq!(note_name_to_midi("C5"), Some(72));
        assert_eq!(note_name_to_midi("C#5"), Some(73));
        assert_eq!(note_name_to_midi("D5"), Some(74));
    }

    #[test]
    fn test_midi_range() {
        assert_eq!(note_name_to_midi("C-1"), Some(0));
        assert_eq!(note_name_to_midi("G9"), Some(127));
        assert_eq!(note_name_to_midi("G#9"), None);
        assert_eq!(note_name_to_midi("Cb-1"), None);
    }

    #[test]
    fn test_octave_doubles_frequency() {
        let a3 = note_name_to_freq("A3").unwrap();
        let a4 = note_name_to_freq("A4").unwrap();
        assert!((a3 - 220.0).abs() < 1e-9);
        assert!((a4 - 440.0).abs() < 1e-9);
    }
}
