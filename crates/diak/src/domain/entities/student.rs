//! Student - Persisted Directory Entry
//!
//! Pure domain entity without infrastructure dependencies. Email
//! uniqueness across records is enforced by the storage layer, not
//! here; this module only owns the syntactic field checks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, FieldError};

/// Student - directory entry owned by the Directory Service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl Student {
    /// Create a new Student with a generated ID
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
        }
    }
}

/// Structural email check: exactly one `@`, non-empty local part,
/// domain part containing a dot, no whitespace.
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Validate a full student field set prior to persistence.
///
/// Collects every failing field so clients see all problems at once.
pub fn validate_fields(name: &str, email: &str) -> Result<(), DomainError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "A név nem lehet üres"));
    }
    if !email_is_valid(email) {
        errors.push(FieldError::new("email", "Érvénytelen email cím formátum"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}
