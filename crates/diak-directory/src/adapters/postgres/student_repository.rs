//! PostgreSQL implementation of StudentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use diak::{DomainError, Student, StudentRepository};

/// PostgreSQL implementation of StudentRepository
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct StudentRow {
    id: Uuid,
    name: String,
    email: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// The unique index on email is the source of truth for duplicate
/// detection; its violation becomes a Conflict.
fn map_sqlx_error(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Conflict,
        _ => DomainError::Repository(err.to_string()),
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let rows = sqlx::query_as::<_, StudentRow>("SELECT id, name, email FROM students ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, DomainError> {
        let row = sqlx::query_as::<_, StudentRow>("SELECT id, name, email FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Student::from))
    }

    async fn insert(&self, student: &Student) -> Result<Student, DomainError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "INSERT INTO students (id, name, email) VALUES ($1, $2, $3) RETURNING id, name, email",
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(&student.email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update(&self, student: &Student) -> Result<Student, DomainError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "UPDATE students SET name = $2, email = $3 WHERE id = $1 RETURNING id, name, email",
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(&student.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        // The row can vanish between the service's lookup and here.
        row.map(Student::from)
            .ok_or_else(|| DomainError::not_found("Student", student.id))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected() > 0)
    }
}
