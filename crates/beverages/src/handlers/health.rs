//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching any backend.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
