//! Mapping of shelf errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shelf_core::{ShelfError, StoreError, ValidationError};

/// Error returned by every API handler
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Shelf(ShelfError),
}

impl From<ShelfError> for ApiError {
    fn from(e: ShelfError) -> Self {
        ApiError::Shelf(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Shelf(e.into())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Shelf(ShelfError::Validation(ValidationError::AlreadyReading)) => {
                StatusCode::CONFLICT
            }
            ApiError::Shelf(ShelfError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Shelf(ShelfError::Store(e)) => match e {
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
                StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                StoreError::Corrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, informational) = match &self {
            ApiError::BadRequest(message) => (message.clone(), false),
            ApiError::Shelf(ShelfError::Validation(e)) => (e.to_string(), e.is_informational()),
            ApiError::Shelf(e) => (e.to_string(), false),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{}", message);
        }

        let body = json!({
            "error": message,
            "informational": informational,
            "retryable": matches!(&self, ApiError::Shelf(e) if e.is_retryable()),
        });
        (status, Json(body)).into_response()
    }
}
