//! Detail command implementation

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use songforge_backend_catalog::generate_detail;
use songforge_spec::Locale;

use super::json_output::{validation_error_to_json, DetailOutput, DetailResult};
use super::{into_result, parse_item_seed, print_json, resolve_locale};

/// Generates the review for one song.
pub fn query(locale: Locale, item_seed: u32) -> DetailOutput {
    let detail = generate_detail(locale, item_seed);
    DetailOutput::success(DetailResult {
        locale,
        seed: item_seed,
        review: detail.review,
    })
}

/// Run the detail command
pub fn run(seed: &str, locale: &str, json_output: bool) -> Result<ExitCode> {
    let output = match parse_item_seed(seed) {
        Ok(item_seed) => query(resolve_locale(locale), item_seed),
        Err(e) => DetailOutput::error(validation_error_to_json(&e)),
    };

    if json_output {
        return print_json(&output);
    }

    let result = into_result(output)?;
    println!(
        "{} {}",
        "Review".cyan().bold(),
        format!("({}, seed {})", result.locale, result.seed).dimmed()
    );
    for paragraph in result.review.split('\n') {
        println!();
        println!("{}", paragraph);
    }
    Ok(ExitCode::SUCCESS)
}
