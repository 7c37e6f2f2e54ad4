//! Handlers for short link resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code was never registered.
/// Returns 500 if the stored URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(long_url.as_str()).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    debug!("Redirecting {} -> {}", code, long_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Rejects `/s` requests that carry no code segment.
///
/// # Endpoint
///
/// `GET /s`
///
/// # Errors
///
/// Always returns 400 Bad Request.
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("No short code provided", json!({ "segment": "code" }))
}
