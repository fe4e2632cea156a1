//! CLI command implementations

pub mod cover;
pub mod detail;
pub mod json_output;
pub mod melody;
pub mod page;
#[cfg(feature = "serve")]
pub mod serve;

use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use songforge_spec::{parse_seed, Locale, ValidationError};

use json_output::QueryOutput;

/// Parses an item seed argument.
///
/// Item seeds are 32-bit; wider values keep their low 32 bits, matching how
/// seeds wrap everywhere else.
pub fn parse_item_seed(text: &str) -> Result<u32, ValidationError> {
    parse_seed(text).map(|seed| seed as u32)
}

/// Resolves a locale flag, warning when it falls back to the default.
pub fn resolve_locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap_or_else(|| {
        tracing::warn!(tag, fallback = %Locale::DEFAULT, "unknown locale");
        Locale::DEFAULT
    })
}

/// Prints a JSON document and maps its outcome to an exit code.
fn print_json<T: Serialize>(output: &QueryOutput<T>) -> Result<ExitCode> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Unwraps a successful output, or turns its errors into one report.
fn into_result<T>(output: QueryOutput<T>) -> Result<T> {
    match output.result {
        Some(result) if output.success => Ok(result),
        _ => {
            let message = output
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Err(anyhow::anyhow!(message))
        }
    }
}
