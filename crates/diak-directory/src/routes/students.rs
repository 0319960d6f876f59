//! Student Routes
//!
//! HTTP handlers that delegate to StudentService for business logic.
//! None of these endpoints enforce authentication; the list handler
//! only classifies the Authorization header and hands it to the
//! aggregation engine, which forwards it downstream.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use diak::CallerCredentials;

use crate::application::Enrichment;
use crate::error::ApiError;
use crate::models::{
    AddressResponse, CreateStudentRequest, StudentResponse, UpdateStudentRequest,
};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/:id",
            put(update_student).delete(delete_student),
        )
}

/// List all students, enriched with a shared address for
/// authenticated callers
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students; elements carry an address field only when enrichment succeeded", body = Vec<StudentResponse>),
        (status = 500, description = "Storage fault")
    ),
    tag = "Student"
)]
pub async fn list_students(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let credentials = CallerCredentials::from_header(headers.get(header::AUTHORIZATION));

    let listing = state
        .students
        .list(credentials)
        .await
        .map_err(|e| ApiError::from_domain("list", None, e))?;

    let address = match listing.enrichment {
        Enrichment::Applied(payload) => Some(AddressResponse::from(payload)),
        Enrichment::Skipped(_) => None,
    };

    let responses: Vec<StudentResponse> = listing
        .students
        .into_iter()
        .map(|student| StudentResponse::from_domain(student, address.clone()))
        .collect();

    Ok(Json(responses))
}

/// Create a new student
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Invalid email or email already in use"),
        (status = 500, description = "Storage fault")
    ),
    tag = "Student"
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student = state
        .students
        .create(payload.name, payload.email)
        .await
        .map_err(|e| ApiError::from_domain("create", None, e))?;

    Ok((
        StatusCode::CREATED,
        Json(StudentResponse::from_domain(student, None)),
    ))
}

/// Update a student
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Invalid email or email already in use"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Storage fault")
    ),
    tag = "Student"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = state
        .students
        .update(id, payload.name, payload.email)
        .await
        .map_err(|e| ApiError::from_domain("update", Some(id), e))?;

    Ok(Json(StudentResponse::from_domain(student, None)))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Storage fault")
    ),
    tag = "Student"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .students
        .delete(id)
        .await
        .map_err(|e| ApiError::from_domain("delete", Some(id), e))?;

    Ok(StatusCode::NO_CONTENT)
}
