use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::fetch::FetchError;

/// Failures surfaced by `POST /api/extract`.
///
/// Every fetch or body failure collapses into `ExtractionFailed`; callers only
/// ever see these two kinds.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    ExtractionFailed(String),
}

impl ExtractionError {
    pub fn status(&self) -> StatusCode {
        match self {
            ExtractionError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ExtractionError::ExtractionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FetchError> for ExtractionError {
    fn from(err: FetchError) -> Self {
        ExtractionError::ExtractionFailed(err.to_string())
    }
}

impl IntoResponse for ExtractionError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
