//! Handler for listing every stored link.

use axum::extract::State;

use crate::api::dto::links::LinkListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all short links and their targets.
///
/// # Endpoint
///
/// `GET /l`
///
/// # Response
///
/// `200 OK`, `text/plain`, one line per mapping ordered by code:
///
/// ```text
/// https://s.example.com/s/2dce7d0e -> https://example.com/a
/// https://s.example.com/s/d7fe59d0 -> https://example.com/b
/// ```
///
/// The listing is a best-effort snapshot; links created while it runs may
/// or may not appear.
pub async fn list_handler(State(state): State<AppState>) -> Result<LinkListResponse, AppError> {
    let base_url = state.link_service.base_url();

    let lines = state
        .link_service
        .enumerate()
        .await?
        .iter()
        .map(|mapping| mapping.to_listing_line(base_url))
        .collect();

    Ok(LinkListResponse { lines })
}
