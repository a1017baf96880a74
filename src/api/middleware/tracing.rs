//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, field};

/// Name of the span field handlers fill with the short code they served.
pub const CODE_FIELD: &str = "code";

/// Builds the per-request `INFO` span.
///
/// The `code` field starts empty; handlers record it once the short code
/// for the request is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            code = field::Empty,
        )
    }
}

/// Records `code` on the current request span.
pub fn record_code(code: &str) {
    Span::current().record(CODE_FIELD, code);
}

/// Creates a tracing middleware for HTTP requests.
///
/// ```text
/// INFO request{method=GET uri=/aB3cD4e version=HTTP/1.1 code=aB3cD4e}: finished processing request latency=0 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_span_declares_code_field() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let request = Request::get("/aB3cD4e").body(()).unwrap();
            let span = RequestSpan.make_span(&request);

            assert!(span.field(CODE_FIELD).is_some());
            assert!(span.field("method").is_some());
        });
    }
}
