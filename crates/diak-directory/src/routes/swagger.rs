//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AddressResponse, CreateStudentRequest, StudentResponse, UpdateStudentRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::students::list_students,
        super::students::create_student,
        super::students::update_student,
        super::students::delete_student,
    ),
    components(schemas(
        CreateStudentRequest,
        UpdateStudentRequest,
        StudentResponse,
        AddressResponse,
    )),
    tags(
        (name = "Student", description = "Student directory with optional address enrichment")
    )
)]
pub struct ApiDoc;
