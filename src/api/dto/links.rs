//! DTO for the list-all endpoint.

use axum::response::{IntoResponse, Response};

/// Plain-text listing, one `short_url -> original_url` line per mapping.
#[derive(Debug, Default)]
pub struct LinkListResponse {
    pub lines: Vec<String>,
}

impl LinkListResponse {
    pub fn body(&self) -> String {
        let mut body = String::new();
        for line in &self.lines {
            body.push_str(line);
            body.push('\n');
        }
        body
    }
}

impl IntoResponse for LinkListResponse {
    fn into_response(self) -> Response {
        self.body().into_response()
    }
}
