//! Student Repository Port
//!
//! Abstract interface for student persistence operations. The backing
//! store owns the uniqueness constraint on email and reports a
//! violation as `DomainError::Conflict`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, Student};

/// Repository interface for Student entities
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find all students
    async fn find_all(&self) -> Result<Vec<Student>, DomainError>;

    /// Find a student by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, DomainError>;

    /// Insert a new student
    async fn insert(&self, student: &Student) -> Result<Student, DomainError>;

    /// Persist a mutation of an existing student
    async fn update(&self, student: &Student) -> Result<Student, DomainError>;

    /// Delete a student by ID; returns false when no row matched
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
