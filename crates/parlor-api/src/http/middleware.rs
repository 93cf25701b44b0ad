//! Request logging middleware.
//!
//! Logs one line per request with the client address, the request line, the
//! response status and latency. The subscriber adds the timestamp.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::now_v7();

    // Absent when the router is driven without a real listener (tests).
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let request_line = format!("{} {} {:?}", req.method(), req.uri(), req.version());

    let response = next.run(req).await;

    tracing::info!(
        client = %client,
        request_id = %request_id,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "\"{request_line}\""
    );

    response
}
