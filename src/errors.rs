use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("booking service error: {0}")]
    Upstream(#[from] ApiError),

    #[error("booking session not found")]
    SessionNotFound,

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::SessionNotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
