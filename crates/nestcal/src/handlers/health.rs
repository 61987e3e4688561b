//! Liveness probe.

use axum::http::StatusCode;

/// GET /api/health - returns 200 immediately, no checks.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
