//! Request tracing middleware
//!
//! Assigns every inbound request a UUID and logs a single structured line
//! when the response is produced, carrying method, path, status, and latency.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Middleware that traces each request with a generated request id.
///
/// The id is attached to the response as an `x-request-id` header so callers
/// can reference a specific request when reporting problems.
pub async fn trace_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = path,
        status = %response.status(),
        latency_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    if let Ok(header_value) = request_id.to_string().parse() {
        response.headers_mut().insert("x-request-id", header_value);
    }

    response
}
