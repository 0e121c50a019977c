use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ValidationErrors;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Handler failure, mapped onto a status code and body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with a field → message map.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// 404 with an empty body.
    #[error("not found")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errs) => (StatusCode::BAD_REQUEST, Json(errs)).into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
            }
        }
    }
}
