use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::AppError;
use crate::ingest::{parser, pipeline};
use crate::state::SharedState;

/// POST /api/contact: accept one submission. The response carries no
/// server-assigned id; the protocol is fire-and-forget for the caller.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());

    // A body unparseable both ways yields no fields at all, which is the
    // same outcome as posting none.
    let raw = parser::parse_body(content_type, &body).map_err(|e| {
        tracing::debug!("Unparseable request body: {e}");
        AppError::MissingFields
    })?;

    pipeline::run(&state, raw).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "status": "ok", "message": "Submission received and stored" })),
    )
        .into_response())
}

/// Pre-flight accommodation: success, CORS headers, no body, no processing.
pub async fn preflight() -> Response {
    (
        [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Methods", "POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
        ],
        StatusCode::OK,
    )
        .into_response()
}

/// Any method other than POST or OPTIONS on the contact route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
