//! Handler for the create-short-link endpoint.

use axum::extract::{Query, State};
use serde_json::json;

use crate::api::dto::shorten::{ShortenQuery, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or re-confirms) the short link for a URL.
///
/// # Endpoint
///
/// `GET /p?url=<url>` (also accepted as `POST`)
///
/// The code is derived from the URL, so repeating the request returns the
/// same short link and leaves the stored mapping unchanged. If the derived
/// code already belongs to another URL the response is the same; the earlier
/// URL stays registered.
///
/// # Response
///
/// `201 Created`, `text/plain`:
///
/// ```text
/// Accepted.
/// Short URL: https://s.example.com/s/2dce7d0e
/// Original URL: https://example.com/a
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
) -> Result<ShortenResponse, AppError> {
    let url = match query.url {
        Some(url) if !url.is_empty() => url,
        _ => {
            return Err(AppError::bad_request(
                "No URL provided",
                json!({ "parameter": "url" }),
            ));
        }
    };

    let (mapping, _) = state.link_service.shorten(&url).await?;

    Ok(ShortenResponse {
        short_url: state.link_service.short_url(&mapping.code),
        original_url: mapping.original_url,
    })
}
