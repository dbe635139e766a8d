//! # Middleware
//!
//! Request correlation: every request gets a [`RequestId`], taken from an
//! incoming `x-request-id` header when present. The id is recorded on a
//! tracing span wrapping the handler, stored in the request extensions for
//! handlers to tag their log boundary with, and echoed on the response.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use duv_core_types::correlation::REQUEST_ID_HEADER;
use duv_core_types::RequestId;
use tracing::Instrument;

pub async fn request_id(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(RequestId::from_header)
        .unwrap_or_default();

    let span = tracing::info_span!(
        "request",
        request_id = request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(request_id.clone());
    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
