//! Domain Errors
//!
//! Error types for domain operations.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// One failing field of a client-submitted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("email address already in use")]
    Conflict,

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity: T, id: Uuid) -> Self {
        Self::NotFound {
            entity: entity.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}
