//! Directory API Routes
//!
//! - /api/students - record lifecycle + enriched listing
//! - /swagger-ui - OpenAPI documentation

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub mod students;
pub mod swagger;

/// Fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" })))
}
