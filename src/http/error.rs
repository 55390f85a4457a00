//! Mapping from upstream failures to HTTP responses.
//!
//! Downstream-originated errors propagate unchanged through the service
//! layer and are translated into a status code exactly once, here, at the
//! routing boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::upstream::UpstreamError;

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            UpstreamError::InvalidArgument(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            UpstreamError::NotFound => (StatusCode::NOT_FOUND, "todo not found".to_string()),
            UpstreamError::Unavailable(e) => {
                tracing::warn!(error = %e, "upstream unreachable");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "upstream unavailable".to_string(),
                )
            }
            UpstreamError::Status(code) => {
                // The original upstream status survives in the log even
                // though the client always sees a 502.
                tracing::warn!(upstream_status = *code, "upstream returned an error status");
                (StatusCode::BAD_GATEWAY, "upstream request failed".to_string())
            }
            UpstreamError::Decode(e) => {
                tracing::warn!(error = %e, "upstream response could not be decoded");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream returned a malformed response".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: UpstreamError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(UpstreamError::InvalidArgument("bad id".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(UpstreamError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(UpstreamError::Status(500)), StatusCode::BAD_GATEWAY);
        assert_eq!(status_of(UpstreamError::Status(503)), StatusCode::BAD_GATEWAY);
    }
}
