//! Request logging middleware
//!
//! Wraps every request, timing it and appending one line per request to the
//! configured access-log file as well as the process log. A file-write
//! failure degrades to a warning; the request itself still succeeds.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::AppState;

/// Middleware: time the request and log
/// `timestamp | protocol | METHOD path | Status: code | Duration: ms | IP: addr`
pub async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let protocol = format!("{:?}", request.version());
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(request).await;

    let line = format!(
        "{} | {} | {} {} | Status: {} | Duration: {}ms | IP: {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S"),
        protocol,
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis(),
        client_ip,
    );

    tracing::info!("{}", line);
    append_to_log_file(&state.config.logging.http_file, &line).await;

    response
}

async fn append_to_log_file(path: &str, line: &str) {
    if let Err(e) = try_append(path, line).await {
        tracing::warn!("Could not write to log file {}: {}", path, e);
    }
}

async fn try_append(path: &str, line: &str) -> std::io::Result<()> {
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{}\n", line).as_bytes()).await?;
    Ok(())
}
