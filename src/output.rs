//! Response writer for resolved colors.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;

/// Resolving to this color always produces a 500 response.
pub const SENTINEL_COLOR: &str = "blue";

/// Status actually sent for `color`; the sentinel forces 500.
pub fn effective_status(color: &str, status: StatusCode) -> StatusCode {
    if color == SENTINEL_COLOR {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        status
    }
}

/// Build a response whose entire body is `color` as a JSON string.
pub fn print_color(color: &str, status: StatusCode) -> Response {
    let status = effective_status(color, status);
    let body = serde_json::Value::from(color).to_string();
    debug!(color, status = status.as_u16(), "Writing color");

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
