//! Link route table.

use crate::api::handlers::{list_handler, missing_code_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes for the three link intents.
///
/// # Endpoints
///
/// - `GET|POST /p?url=<url>` - Create a short link
/// - `GET      /s/{code}`    - Redirect to the stored URL
/// - `GET      /s`           - Missing code, 400
/// - `GET      /l`           - List every short link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/p", get(shorten_handler).post(shorten_handler))
        .route("/s", get(missing_code_handler))
        .route("/s/{code}", get(redirect_handler))
        .route("/l", get(list_handler))
}
