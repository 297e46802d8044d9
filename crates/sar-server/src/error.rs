use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sar_core::SarError;
use sar_simulation::SimError;
use tracing::warn;

/// A request the API refused to carry out.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request named something that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request was malformed or out of range.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<SarError> for ApiError {
    fn from(err: SarError) -> Self {
        match err {
            SarError::VesselNotFound(_) => ApiError::NotFound(err.to_string()),
            SarError::UnknownCommand(_) | SarError::Validation(_) => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<SimError> for ApiError {
    fn from(err: SimError) -> Self {
        match err {
            SimError::Core(e) => e.into(),
            SimError::InvalidConfig(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = %self, "request rejected");
        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
