//! Melody command implementation
//!
//! Prints a song's note sequence and optionally renders a WAV preview.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use songforge_backend_music::{generate_melody, render_preview_wav, WavResult};
use songforge_spec::{validate_duration, Melody};

use super::json_output::{
    error_codes, validation_error_to_json, JsonError, MelodyOutput, MelodyResult,
};
use super::{into_result, parse_item_seed, print_json};

/// Generates a melody after checking its nominal duration.
pub fn generate(item_seed: u32, duration: f64) -> Result<Melody, JsonError> {
    validate_duration(duration).map_err(|e| validation_error_to_json(&e))?;
    Ok(generate_melody(item_seed, duration))
}

/// Renders the WAV preview of a melody.
pub fn preview(melody: &Melody) -> Result<WavResult, JsonError> {
    render_preview_wav(melody).map_err(|e| {
        JsonError::new(
            error_codes::MELODY_RENDER,
            format!("Failed to render melody preview: {}", e),
        )
    })
}

/// Generates a melody, writing its preview to `wav` when given.
pub fn query(item_seed: u32, duration: f64, wav: Option<&Path>) -> MelodyOutput {
    let melody = match generate(item_seed, duration) {
        Ok(melody) => melody,
        Err(e) => return MelodyOutput::error(e),
    };

    let mut result = MelodyResult {
        seed: item_seed,
        melody,
        wav: None,
        pcm_hash: None,
        data: None,
    };

    if let Some(path) = wav {
        let rendered = match preview(&result.melody) {
            Ok(rendered) => rendered,
            Err(e) => return MelodyOutput::error(e),
        };
        if let Err(e) = std::fs::write(path, &rendered.wav_data) {
            return MelodyOutput::error(
                JsonError::new(
                    error_codes::FILE_WRITE,
                    format!("Failed to write {}: {}", path.display(), e),
                )
                .with_field("wav"),
            );
        }
        tracing::info!(path = %path.display(), samples = rendered.num_samples, "wrote melody preview");
        result.wav = Some(path.display().to_string());
        result.pcm_hash = Some(rendered.pcm_hash);
    }

    MelodyOutput::success(result)
}

/// Run the melody command
///
/// # Arguments
/// * `seed` - Item seed as decimal text
/// * `duration` - Nominal melody length in seconds
/// * `wav` - Optional destination for a WAV preview
/// * `json_output` - Whether to print machine-readable JSON
pub fn run(seed: &str, duration: f64, wav: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let output = match parse_item_seed(seed) {
        Ok(item_seed) => query(item_seed, duration, wav.map(Path::new)),
        Err(e) => MelodyOutput::error(validation_error_to_json(&e)),
    };

    if json_output {
        return print_json(&output);
    }

    let result = into_result(output)?;
    println!(
        "{} {} {}",
        "Melody".cyan().bold(),
        result.melody.scale,
        format!("(seed {}, {:.2}s)", result.seed, result.melody.total_duration).dimmed()
    );
    for note in &result.melody.notes {
        println!(
            "  {:>5.2}s  {:<3} {}",
            note.start_time,
            note.pitch,
            format!("{:.2}s", note.duration).dimmed()
        );
    }
    if let Some(path) = &result.wav {
        println!("{} {}", "Wrote".green().bold(), path);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use songforge_spec::ScaleKind;

    #[test]
    fn test_query_seed_42() {
        let output = query(42, 4.0, None);
        assert!(output.success);
        let result = output.result.unwrap();
        assert_eq!(result.melody.scale, ScaleKind::AMinor);
        assert_eq!(result.melody.notes.len(), 16);
        assert!(result.wav.is_none());
    }

    #[test]
    fn test_query_rejects_bad_duration() {
        let output = query(42, 0.0, None);
        assert!(!output.success);
        assert_eq!(output.errors[0].code, error_codes::INVALID_ARGUMENT);
        assert_eq!(output.errors[0].field.as_deref(), Some("duration"));
    }

    #[test]
    fn test_query_writes_wav() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("melody.wav");

        let output = query(5, 4.0, Some(&path));
        assert!(output.success);
        let result = output.result.unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(
            songforge_backend_music::compute_pcm_hash(&bytes),
            result.pcm_hash
        );
    }
}
