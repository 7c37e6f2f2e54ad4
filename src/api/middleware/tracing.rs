//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span, info_span};

type MakeRequestSpan = fn(&Request<axum::body::Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// **On Request:** opens an `INFO` span with the method and path. The query
/// string is left out because `/p?url=...` carries the full target URL.
///
/// **On Response:** logs status and latency in milliseconds at `INFO`.
///
/// ```text
/// INFO request{method=GET path=/s/2dce7d0e}: finished processing request latency=0 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeRequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<axum::body::Body>) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}
