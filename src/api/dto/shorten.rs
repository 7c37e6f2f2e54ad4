//! DTOs for the create-short-link endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// Query parameters of `/p`.
#[derive(Debug, Deserialize)]
pub struct ShortenQuery {
    /// The URL to shorten. Stored as given, without validation.
    /// An empty value counts as missing.
    pub url: Option<String>,
}

/// Plain-text confirmation returned with `201 Created`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
}

impl ShortenResponse {
    pub fn body(&self) -> String {
        format!(
            "Accepted.\nShort URL: {}\nOriginal URL: {}",
            self.short_url, self.original_url
        )
    }
}

impl IntoResponse for ShortenResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, self.body()).into_response()
    }
}
