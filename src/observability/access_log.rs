//! Per-request access logging.
//!
//! # Responsibilities
//! - Record method, path, and final status once per request, after the
//!   response is materialized
//! - Feed the request metrics
//!
//! # Design Decisions
//! - Implemented as middleware so every branch (handlers, fallback, error
//!   mapping) passes through it exactly once
//! - Request data is captured before dispatch and threaded through the
//!   call explicitly; nothing is read back from ambient task-local state

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::metrics;

/// Middleware recording the outcome of every request.
pub async fn record(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    tracing::info!(method = %method, path = %path, status, "request completed");
    metrics::record_request(method.as_str(), &path, status, start);

    response
}
