//! WebSocket query server for web front ends.
//!
//! Each text frame carries one JSON request; each reply is the same
//! `QueryOutput` document the matching `--json` command prints.
//!
//! ## Protocol
//!
//! Requests are JSON objects with a `type` field:
//!
//! - `page`: One catalog page
//!   ```json
//!   {"type": "page", "locale": "de-DE", "seed": "42", "page": 3, "pageSize": 20, "avgLikes": 2.5}
//!   ```
//!
//! - `detail`: The review for one song
//!   ```json
//!   {"type": "detail", "seed": 123456, "locale": "uk-UA"}
//!   ```
//!
//! - `cover`: Cover art as base64 PNG
//!   ```json
//!   {"type": "cover", "seed": 123456, "title": "Quiet Storm", "artist": "Ada"}
//!   ```
//!
//! - `melody`: The note sequence, optionally with a base64 WAV preview
//!   ```json
//!   {"type": "melody", "seed": 123456, "preview": true}
//!   ```

mod handler;
mod types;


use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;
use tokio_tungstenite::tungstenite::Message;

pub use handler::{cover_query, handle_request, melody_query};
pub use types::{ErrorResponse, ServeConfig, ServeRequest, DEFAULT_HOST, DEFAULT_PORT};

/// Run the WebSocket query server.
///
/// # Returns
/// Exit code: 0 on clean shutdown, 1 on error
pub fn run(config: ServeConfig) -> Result<ExitCode> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    rt.block_on(async move { run_server(config).await })
}

/// Run the WebSocket server (async entry point).
async fn run_server(config: ServeConfig) -> Result<ExitCode> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))?;
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;

    tracing::info!("query server listening on ws://{} (Ctrl+C to shut down)", addr);

    let (shutdown_tx, _) = broadcast::channel::<()>(1);
    let shutdown_tx = Arc::new(shutdown_tx);

    let shutdown_tx_clone = Arc::clone(&shutdown_tx);
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            tracing::info!("shutting down");
            let _ = shutdown_tx_clone.send(());
        }
    });

    let mut shutdown_rx = shutdown_tx.subscribe();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        tracing::info!(%peer_addr, "new connection");
                        let shutdown_rx = shutdown_tx.subscribe();
                        tokio::spawn(handle_connection(stream, peer_addr, shutdown_rx));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "accept failed");
                    }
                }
            }
            _ = shutdown_rx.recv() => {
                tracing::info!("server shutdown complete");
                break;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Handle a single WebSocket connection.
async fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    let ws_stream = match tokio_tungstenite::accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            tracing::warn!(%peer_addr, error = %e, "websocket handshake failed");
            return;
        }
    };

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            msg_opt = read.next() => {
                match msg_opt {
                    Some(Ok(msg)) => {
                        if let Some(response) = handler::process_message(msg).await {
                            if let Err(e) = write.send(Message::Text(response)).await {
                                tracing::warn!(%peer_addr, error = %e, "send failed");
                                break;
                            }
                        }
                    }
                    Some(Err(e)) => {
                        tracing::warn!(%peer_addr, error = %e, "receive failed");
                        break;
                    }
                    None => break,
                }
            }
            _ = shutdown_rx.recv() => {
                let _ = write.send(Message::Close(None)).await;
                break;
            }
        }
    }

    tracing::info!(%peer_addr, "connection closed");
}
