//! Cover command implementation
//!
//! Renders a song's cover art to a PNG file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use songforge_backend_texture::render_cover;

use super::json_output::{
    error_codes, validation_error_to_json, CoverOutput, CoverResult, JsonError,
};
use super::{into_result, parse_item_seed, print_json};

/// Renders and encodes a cover, returning its description and PNG bytes.
///
/// `output` and `data` are left unset for the caller to fill in.
pub fn render(title: &str, artist: &str, item_seed: u32) -> Result<(CoverResult, Vec<u8>), JsonError> {
    let art = render_cover(title, artist, item_seed);
    let png = art.to_png().map_err(|e| {
        JsonError::new(error_codes::COVER_ENCODE, format!("Failed to encode cover: {}", e))
    })?;

    let result = CoverResult {
        seed: item_seed,
        hue1: art.plan.hue1,
        hue2: art.plan.hue2,
        width: art.image.width,
        height: art.image.height,
        hash: png.hash,
        output: None,
        data: None,
    };
    Ok((result, png.data))
}

/// Renders a cover and writes it to `output`.
pub fn query(title: &str, artist: &str, item_seed: u32, output: &Path) -> CoverOutput {
    let (mut result, data) = match render(title, artist, item_seed) {
        Ok(rendered) => rendered,
        Err(e) => return CoverOutput::error(e),
    };

    if let Err(e) = std::fs::write(output, &data) {
        return CoverOutput::error(
            JsonError::new(
                error_codes::FILE_WRITE,
                format!("Failed to write {}: {}", output.display(), e),
            )
            .with_field("output"),
        );
    }

    tracing::info!(path = %output.display(), hash = %result.hash, "wrote cover");
    result.output = Some(output.display().to_string());
    CoverOutput::success(result)
}

/// Run the cover command
///
/// # Arguments
/// * `seed` - Item seed as decimal text
/// * `title` - Song title drawn on the cover
/// * `artist` - Artist name drawn on the cover
/// * `output` - Destination PNG path
/// * `json_output` - Whether to print machine-readable JSON
pub fn run(seed: &str, title: &str, artist: &str, output: &str, json_output: bool) -> Result<ExitCode> {
    let result = match parse_item_seed(seed) {
        Ok(item_seed) => query(title, artist, item_seed, Path::new(output)),
        Err(e) => CoverOutput::error(validation_error_to_json(&e)),
    };

    if json_output {
        return print_json(&result);
    }

    let result = into_result(result)?;
    println!(
        "{} {} {}",
        "Wrote".green().bold(),
        output,
        format!("(hues {}/{}, {})", result.hue1, result.hue2, &result.hash[..16]).dimmed()
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_reports_plan_hues() {
        let (result, data) = render("A", "B", 42).unwrap();
        assert_eq!(result.hue1, 216);
        assert_eq!(result.hue2, 329);
        assert_eq!(result.width, 300);
        assert_eq!(&data[1..4], b"PNG");
    }

    #[test]
    fn test_query_writes_png() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cover.png");

        let output = query("Quiet Storm", "Ada", 7, &path);
        assert!(output.success);
        let result = output.result.unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(songforge_backend_texture::png::hash_png(&bytes), result.hash);
        assert_eq!(result.output.as_deref(), Some(path.to_str().unwrap()));
    }

    #[test]
    fn test_query_reports_write_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("cover.png");

        let output = query("A", "B", 1, &path);
        assert!(!output.success);
        assert_eq!(output.errors[0].code, error_codes::FILE_WRITE);
    }
}
