// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span carrying method, path, and request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::http::Request;
use tracing::{field::Empty, info_span, Span};

/// Header carrying the request id, set by the request-id layer when absent
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id from the headers, if one was set
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Create a tracing span for an HTTP request
///
/// Only the path is recorded; query strings and bodies may carry submitted
/// values and are left out.
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = request_id(request).unwrap_or("unknown"),
        status_code = Empty,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_lookup() {
        let request = Request::builder()
            .uri("/api/calculators/bmi?weight=70")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(())
            .unwrap();
        assert_eq!(request_id(&request), Some("abc-123"));

        let bare = Request::builder().uri("/health").body(()).unwrap();
        assert_eq!(request_id(&bare), None);
    }
}
