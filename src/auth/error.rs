use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Wire shape shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(details),
            ),
            ApiError::EmailTaken => (
                StatusCode::BAD_REQUEST,
                "Email already registered".to_string(),
                None,
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials".to_string(),
                None,
            ),
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };
        (status, Json(ErrorBody { error, details })).into_response()
    }
}
