//! Page command implementation
//!
//! Generates one page of the catalog and prints it as a table or JSON.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use songforge_backend_catalog::generate_request;
use songforge_spec::{parse_seed, GenerationRequest, Locale};

use super::json_output::{validation_error_to_json, PageOutput, PageResult};
use super::{into_result, print_json, resolve_locale};

/// Validates a request and generates its page.
///
/// Shared by the CLI and the server, so both reject the same inputs.
pub fn query(request: &GenerationRequest) -> PageOutput {
    if let Err(e) = request.validate() {
        return PageOutput::error(validation_error_to_json(&e));
    }

    PageOutput::success(PageResult {
        locale: request.locale,
        seed: request.user_seed,
        page: request.page,
        page_size: request.page_size,
        songs: generate_request(request),
    })
}

/// Run the page command
///
/// # Arguments
/// * `locale` - Locale tag; unknown tags fall back to en-US
/// * `seed` - User seed as decimal text
/// * `page` - 1-based page number
/// * `page_size` - Songs per page
/// * `avg_likes` - Average like count
/// * `json_output` - Whether to print machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the request was rejected
pub fn run(
    locale: &str,
    seed: &str,
    page: u64,
    page_size: u32,
    avg_likes: f64,
    json_output: bool,
) -> Result<ExitCode> {
    let output = match parse_seed(seed) {
        Ok(user_seed) => query(&GenerationRequest::new(
            resolve_locale(locale),
            user_seed,
            page,
            page_size,
            avg_likes,
        )),
        Err(e) => PageOutput::error(validation_error_to_json(&e)),
    };

    if json_output {
        return print_json(&output);
    }

    let result = into_result(output)?;
    print_table(&result);
    Ok(ExitCode::SUCCESS)
}

fn print_table(result: &PageResult) {
    println!(
        "{} {} {}",
        "Page".cyan().bold(),
        result.page,
        format!("({}, seed {})", result.locale, result.seed).dimmed()
    );
    println!();
    for song in &result.songs {
        println!(
            "{:>6}  {}  {} {}",
            song.index.to_string().dimmed(),
            song.title.bold(),
            "by".dimmed(),
            song.artist
        );
        println!(
            "        {} {}  {} {}  {} {}",
            "album:".dimmed(),
            song.album,
            "genre:".dimmed(),
            song.genre,
            "likes:".dimmed(),
            song.likes
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::json_output::error_codes;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_returns_indexed_songs() {
        let request = GenerationRequest::new(Locale::DeDe, 42, 3, 20, 0.0);
        let output = query(&request);
        assert!(output.success);
        let result = output.result.unwrap();
        let indices: Vec<u64> = result.songs.iter().map(|s| s.index).collect();
        assert_eq!(indices, (41..=60).collect::<Vec<u64>>());
        assert_eq!(result.locale, Locale::DeDe);
    }

    #[test]
    fn test_query_rejects_page_zero() {
        let request = GenerationRequest::new(Locale::EnUs, 1, 0, 20, 0.0);
        let output = query(&request);
        assert!(!output.success);
        assert!(output.result.is_none());
        assert_eq!(output.errors[0].code, error_codes::INVALID_ARGUMENT);
        assert_eq!(output.errors[0].field.as_deref(), Some("page"));
    }

    #[test]
    fn test_query_rejects_negative_likes() {
        let request = GenerationRequest::new(Locale::EnUs, 1, 1, 20, -1.0);
        let output = query(&request);
        assert!(!output.success);
        assert_eq!(output.errors[0].field.as_deref(), Some("avgLikes"));
    }

    #[test]
    fn test_result_json_uses_camel_case() {
        let output = query(&GenerationRequest::new(Locale::EnUs, 7, 1, 2, 0.0));
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"]["pageSize"], 2);
        assert_eq!(json["result"]["locale"], "en-US");
        assert_eq!(json["result"]["songs"].as_array().unwrap().len(), 2);
    }
}
