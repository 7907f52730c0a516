//! API failure envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A failed API operation.
///
/// Failures are data, not transport errors: every endpoint answers HTTP 200
/// with `{"success": false, "error": ...}` so the page can render the
/// message instead of a status code.
#[derive(Debug)]
pub struct ApiFailure(pub String);

#[derive(Serialize)]
struct FailureEnvelope {
    success: bool,
    error: String,
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(FailureEnvelope {
                success: false,
                error: self.0,
            }),
        )
            .into_response()
    }
}

impl From<datalens::DatalensError> for ApiFailure {
    fn from(err: datalens::DatalensError) -> Self {
        ApiFailure(err.to_string())
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ApiFailure {}
