//! Request handler logic for the WebSocket query server.

use base64::Engine;
use serde::Serialize;
use tokio_tungstenite::tungstenite::Message;

use crate::commands::json_output::{error_codes, CoverOutput, MelodyOutput, MelodyResult};
use crate::commands::{cover, detail, melody, page};

use super::types::{ErrorResponse, ServeRequest};

/// Process a single WebSocket message and return a response.
pub async fn process_message(msg: Message) -> Option<String> {
    match msg {
        Message::Text(text) => Some(handle_request(&text)),
        Message::Binary(data) => match String::from_utf8(data) {
            Ok(text) => Some(handle_request(&text)),
            Err(_) => Some(error_json(ErrorResponse::new(
                error_codes::BINARY_NOT_UTF8,
                "Binary message must be valid UTF-8 JSON",
            ))),
        },
        // Ping/pong is answered by tungstenite; close and raw frames need no reply.
        Message::Ping(_) | Message::Pong(_) | Message::Close(_) | Message::Frame(_) => None,
    }
}

/// Handle a JSON request and return a JSON response.
pub fn handle_request(json_text: &str) -> String {
    let request: ServeRequest = match serde_json::from_str(json_text) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!(error = %e, "rejected request");
            return error_json(ErrorResponse::new(
                error_codes::REQUEST_PARSE,
                format!("Invalid request JSON: {}", e),
            ));
        }
    };

    tracing::debug!(kind = request.kind(), "handling request");

    match request {
        ServeRequest::Page(req) => to_json(&page::query(&req)),
        ServeRequest::Detail { seed, locale } => to_json(&detail::query(locale, seed as u32)),
        ServeRequest::Cover {
            seed,
            title,
            artist,
        } => to_json(&cover_query(&title, &artist, seed as u32)),
        ServeRequest::Melody {
            seed,
            duration,
            preview,
        } => to_json(&melody_query(seed as u32, duration, preview)),
    }
}

/// Renders a cover and inlines the PNG as base64.
pub fn cover_query(title: &str, artist: &str, item_seed: u32) -> CoverOutput {
    match cover::render(title, artist, item_seed) {
        Ok((mut result, png)) => {
            result.data = Some(base64::engine::general_purpose::STANDARD.encode(png));
            CoverOutput::success(result)
        }
        Err(e) => CoverOutput::error(e),
    }
}

/// Generates a melody, inlining a base64 WAV preview when asked.
pub fn melody_query(item_seed: u32, duration: f64, preview: bool) -> MelodyOutput {
    let melody = match melody::generate(item_seed, duration) {
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
    if preview {
        match melody::preview(&result.melody) {
            Ok(wav) => {
                result.data = Some(base64::engine::general_purpose::STANDARD.encode(&wav.wav_data));
                result.pcm_hash = Some(wav.pcm_hash);
            }
            Err(e) => return MelodyOutput::error(e),
        }
    }
    MelodyOutput::success(result)
}

fn to_json<T: Serialize>(output: &T) -> String {
    serde_json::to_string(output).unwrap_or_else(|e| {
        error_json(ErrorResponse::new(
            error_codes::JSON_SERIALIZE,
            format!("Failed to serialize response: {}", e),
        ))
    })
}

fn error_json(error: ErrorResponse) -> String {
    serde_json::to_string(&error).unwrap_or_else(|_| {
        r#"{"success":false,"errors":[{"code":"CLI_005","message":"Failed to serialize response"}]}"#
            .to_string()
    })
}
