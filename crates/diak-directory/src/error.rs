//! HTTP Error Mapping
//!
//! Maps the domain error taxonomy onto the directory API's JSON
//! responses. Storage faults render a generic message; the detail
//! stays in the logs together with the failing operation and target.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use diak::{DomainError, FieldError};

/// API-facing error for the directory endpoints
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a field-level `errors` array
    Validation(Vec<FieldError>),
    /// 400 with the fixed duplicate-email message
    DuplicateEmail,
    /// 404
    StudentNotFound,
    /// 500, detail already logged
    Internal,
}

impl ApiError {
    /// Map a domain error, logging storage faults with the operation
    /// and target identifier for diagnosis.
    pub fn from_domain(operation: &'static str, id: Option<Uuid>, err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => ApiError::Validation(errors),
            DomainError::Conflict => {
                tracing::warn!(operation, "Duplicate email address");
                ApiError::DuplicateEmail
            }
            DomainError::NotFound { .. } => ApiError::StudentNotFound,
            DomainError::Repository(detail) => {
                tracing::error!(operation, id = ?id, %detail, "Storage fault");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Az email cím már használatban van" })),
            )
                .into_response(),
            ApiError::StudentNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Student not found" })),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response(),
        }
    }
}
