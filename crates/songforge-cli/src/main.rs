//! Songforge CLI - Command-line interface for the procedural song catalog
//!
//! Every subcommand is a pure function of its arguments: the same seed and
//! locale always print the same songs, covers and melodies.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use songforge_cli::{commands, logging};

/// Songforge - Seeded Song Catalog Generator
#[derive(Parser)]
#[command(name = "songforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one page of the song catalog
    Page {
        /// Content locale (en-US, de-DE, uk-UA); unknown tags fall back to en-US
        #[arg(short, long, default_value = "en-US")]
        locale: String,

        /// User seed (any integer; out-of-range values wrap)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        seed: String,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u64,

        /// Songs per page
        #[arg(long, default_value_t = 20)]
        page_size: u32,

        /// Average like count per song
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        avg_likes: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate the review for one song
    Detail {
        /// Item seed of the song
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,

        /// Content locale; unknown tags fall back to en-US
        #[arg(short, long, default_value = "en-US")]
        locale: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a song's cover art to PNG
    Cover {
        /// Item seed of the song
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,

        /// Song title drawn on the cover
        #[arg(short, long)]
        title: String,

        /// Artist name drawn on the cover
        #[arg(short, long)]
        artist: String,

        /// Output PNG path
        #[arg(short, long)]
        output: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a song's melody
    Melody {
        /// Item seed of the song
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,

        /// Nominal melody length in seconds
        #[arg(short, long, default_value_t = 4.0, allow_hyphen_values = true)]
        duration: f64,

        /// Also render a WAV preview to this path
        #[arg(long)]
        wav: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Serve page, detail, cover and melody queries over WebSocket
    #[cfg(feature = "serve")]
    Serve {
        /// Address to bind
        #[arg(long, default_value = commands::serve::DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = commands::serve::DEFAULT_PORT)]
        port: u16,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_log = match cli.command {
        #[cfg(feature = "serve")]
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    logging::init(default_log);

    let result = match cli.command {
        Commands::Page {
            locale,
            seed,
            page,
            page_size,
            avg_likes,
            json,
        } => commands::page::run(&locale, &seed, page, page_size, avg_likes, json),
        Commands::Detail { seed, locale, json } => commands::detail::run(&seed, &locale, json),
        Commands::Cover {
            seed,
            title,
            artist,
            output,
            json,
        } => commands::cover::run(&seed, &title, &artist, &output, json),
        Commands::Melody {
            seed,
            duration,
            wav,
            json,
        } => commands::melody::run(&seed, duration, wav.as_deref(), json),
        #[cfg(feature = "serve")]
        Commands::Serve { host, port } => {
            commands::serve::run(commands::serve::ServeConfig { host, port })
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
