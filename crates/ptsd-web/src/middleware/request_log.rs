use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emits one `api_request` event per request with method, path, status and
/// latency.
///
/// Only the request line is recorded. Intake bodies carry patient vitals and
/// psychosocial answers, so neither the form nor the JSON payload is read
/// here; route handlers log the assessment id and risk level instead.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}
