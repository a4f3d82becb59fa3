//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
///
/// Unknown document ids never reach this type; the viewer falls back
/// to the first document instead of failing. What remains is fatal for
/// the individual render: the source text could not be read, or the
/// parser exhausted its anchor suffix attempts.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Source text could not be read.
    #[error("storage error: {0}")]
    Storage(#[from] mdview_storage::StorageError),

    /// Header extraction or body conversion failed.
    #[error("render error: {0}")]
    Render(#[from] mdview_renderer::HeaderError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        let body = json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_maps_to_500() {
        let err = ServerError::Storage(mdview_storage::StorageError::SourceNotFound(
            "/missing".into(),
        ));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
