//! Student Request/Response Models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use diak::{AddressPayload, Student};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
}

/// Partial update: absent fields keep their current values
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddressResponse {
    pub id: Uuid,
    pub address: String,
}

impl From<AddressPayload> for AddressResponse {
    fn from(payload: AddressPayload) -> Self {
        Self {
            id: payload.id,
            address: payload.address,
        }
    }
}

/// Student view; `address` appears only on enriched list responses
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressResponse>,
}

impl StudentResponse {
    pub fn from_domain(student: Student, address: Option<AddressResponse>) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            address,
        }
    }
}
