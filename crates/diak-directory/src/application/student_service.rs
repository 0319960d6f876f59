//! Student Application Service (Use Case)
//!
//! Record lifecycle plus the aggregation/merge engine for the list
//! operation. The partial-failure policy lives here: a repository
//! fault fails the request, a downstream enrichment fault never does.

use std::sync::Arc;

use uuid::Uuid;

use diak::{
    validate_fields, AddressFetchError, AddressPayload, AddressProvider, CallerCredentials,
    DomainError, Student, StudentRepository,
};

/// Outcome of the enrichment attempt for one list request.
///
/// The fallback is an explicit variant rather than a swallowed error
/// so the degradation policy is visible in the type signature.
#[derive(Debug)]
pub enum Enrichment {
    /// One payload, attached to every record in the response.
    Applied(AddressPayload),
    Skipped(SkipReason),
}

/// Why a list response carries no address data
#[derive(Debug)]
pub enum SkipReason {
    /// Anonymous caller; no downstream call was attempted.
    NoCredentials,
    /// Header present but unforwardable; no downstream call either.
    UnusableCredentials,
    /// Downstream call attempted and failed; response degrades.
    Degraded(AddressFetchError),
}

/// List result: the records plus what happened to enrichment
#[derive(Debug)]
pub struct StudentListing {
    pub students: Vec<Student>,
    pub enrichment: Enrichment,
}

/// Application service for student operations
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
    addresses: Arc<dyn AddressProvider>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>, addresses: Arc<dyn AddressProvider>) -> Self {
        Self { repo, addresses }
    }

    /// List all students, enriching with one shared address when the
    /// caller forwarded credentials and the Address Service accepted
    /// them.
    ///
    /// Exactly one downstream call is made per list request, never one
    /// per student. A repository fault is fatal; every downstream
    /// fault degrades to the unenriched listing.
    pub async fn list(&self, credentials: CallerCredentials) -> Result<StudentListing, DomainError> {
        let students = self.repo.find_all().await?;
        tracing::info!(count = students.len(), "Listed students");

        let enrichment = match credentials {
            CallerCredentials::Anonymous => Enrichment::Skipped(SkipReason::NoCredentials),
            CallerCredentials::Unusable => {
                tracing::warn!("Unusable Authorization header, skipping enrichment");
                Enrichment::Skipped(SkipReason::UnusableCredentials)
            }
            CallerCredentials::Forwarded(header) => match self.addresses.fetch(&header).await {
                Ok(payload) => Enrichment::Applied(payload),
                Err(err) => {
                    tracing::warn!(error = %err, "Address enrichment failed, returning plain list");
                    Enrichment::Skipped(SkipReason::Degraded(err))
                }
            },
        };

        Ok(StudentListing {
            students,
            enrichment,
        })
    }

    /// Create a new student
    pub async fn create(&self, name: String, email: String) -> Result<Student, DomainError> {
        validate_fields(&name, &email)?;
        let student = Student::new(name, email);
        let saved = self.repo.insert(&student).await?;
        tracing::info!(student_id = %saved.id, "Created student");
        Ok(saved)
    }

    /// Update a student; absent fields keep their current values
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Student, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Student", id))?;

        let merged = Student {
            id: current.id,
            name: name.unwrap_or(current.name),
            email: email.unwrap_or(current.email),
        };
        validate_fields(&merged.name, &merged.email)?;

        let saved = self.repo.update(&merged).await?;
        tracing::info!(student_id = %saved.id, "Updated student");
        Ok(saved)
    }

    /// Delete a student
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Student", id));
        }
        tracing::info!(student_id = %id, "Deleted student");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryStudents, ProviderBehavior, StubAddresses};

    fn service(
        repo: Arc<InMemoryStudents>,
        provider: Arc<StubAddresses>,
    ) -> StudentService {
        StudentService::new(repo, provider)
    }

    fn seeded_repo() -> Arc<InMemoryStudents> {
        let repo = InMemoryStudents::default();
        repo.seed(Student::new("Kiss József".into(), "kiss@example.com".into()));
        repo.seed(Student::new("Nagy Anna".into(), "nagy@example.com".into()));
        Arc::new(repo)
    }

    #[tokio::test]
    async fn anonymous_list_never_calls_the_provider() {
        let provider = Arc::new(StubAddresses::succeeding());
        let service = service(seeded_repo(), provider.clone());

        let listing = service.list(CallerCredentials::Anonymous).await.unwrap();

        assert_eq!(listing.students.len(), 2);
        assert!(matches!(
            listing.enrichment,
            Enrichment::Skipped(SkipReason::NoCredentials)
        ));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn forwarded_credentials_fetch_exactly_one_address() {
        let provider = Arc::new(StubAddresses::succeeding());
        let service = service(seeded_repo(), provider.clone());

        let listing = service
            .list(CallerCredentials::Forwarded("Basic abc".into()))
            .await
            .unwrap();

        assert_eq!(provider.calls(), 1);
        let Enrichment::Applied(payload) = listing.enrichment else {
            panic!("expected applied enrichment");
        };
        assert_eq!(payload, provider.payload());
        assert_eq!(provider.last_authorization(), Some("Basic abc".to_string()));
    }

    #[tokio::test]
    async fn unusable_credentials_degrade_without_a_call() {
        let provider = Arc::new(StubAddresses::succeeding());
        let service = service(seeded_repo(), provider.clone());

        let listing = service.list(CallerCredentials::Unusable).await.unwrap();

        assert_eq!(provider.calls(), 0);
        assert!(matches!(
            listing.enrichment,
            Enrichment::Skipped(SkipReason::UnusableCredentials)
        ));
    }

    #[tokio::test]
    async fn unreachable_provider_degrades_instead_of_failing() {
        let provider = Arc::new(StubAddresses::with_behavior(ProviderBehavior::Unreachable));
        let service = service(seeded_repo(), provider.clone());

        let listing = service
            .list(CallerCredentials::Forwarded("Basic abc".into()))
            .await
            .unwrap();

        assert_eq!(listing.students.len(), 2);
        assert!(matches!(
            listing.enrichment,
            Enrichment::Skipped(SkipReason::Degraded(AddressFetchError::Transport(_)))
        ));
    }

    #[tokio::test]
    async fn rejected_credentials_degrade_like_a_network_failure() {
        let provider = Arc::new(StubAddresses::with_behavior(ProviderBehavior::Unauthorized));
        let service = service(seeded_repo(), provider);

        let listing = service
            .list(CallerCredentials::Forwarded("Basic wrong".into()))
            .await
            .unwrap();

        assert!(matches!(
            listing.enrichment,
            Enrichment::Skipped(SkipReason::Degraded(AddressFetchError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn repository_fault_is_fatal_to_the_list() {
        let repo = Arc::new(InMemoryStudents::failing());
        let provider = Arc::new(StubAddresses::succeeding());
        let service = service(repo, provider);

        let result = service.list(CallerCredentials::Anonymous).await;
        assert!(matches!(result, Err(DomainError::Repository(_))));
    }

    #[tokio::test]
    async fn create_rejects_invalid_email() {
        let service = service(Arc::new(InMemoryStudents::default()), Arc::new(StubAddresses::succeeding()));

        let err = service
            .create("Test Student".into(), "invalid-email".into())
            .await
            .unwrap_err();

        let DomainError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors[0].field, "email");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let repo = Arc::new(InMemoryStudents::default());
        let service = service(repo, Arc::new(StubAddresses::succeeding()));

        service
            .create("First".into(), "test@example.com".into())
            .await
            .unwrap();
        let err = service
            .create("Second".into(), "test@example.com".into())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let service = service(Arc::new(InMemoryStudents::default()), Arc::new(StubAddresses::succeeding()));

        let err = service
            .update(Uuid::new_v4(), Some("New Name".into()), None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_merges_partial_fields() {
        let repo = seeded_repo();
        let id = repo.all()[0].id;
        let service = service(repo.clone(), Arc::new(StubAddresses::succeeding()));

        let updated = service
            .update(id, Some("Renamed".into()), None)
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.email, "kiss@example.com");
    }

    #[tokio::test]
    async fn update_revalidates_the_merged_field_set() {
        let repo = seeded_repo();
        let id = repo.all()[0].id;
        let service = service(repo, Arc::new(StubAddresses::succeeding()));

        let err = service
            .update(id, None, Some("not-an-email".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_rejects_email_collision_with_another_record() {
        let repo = seeded_repo();
        let id = repo.all()[0].id;
        let service = service(repo, Arc::new(StubAddresses::succeeding()));

        let err = service
            .update(id, None, Some("nagy@example.com".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let service = service(Arc::new(InMemoryStudents::default()), Arc::new(StubAddresses::succeeding()));

        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let repo = seeded_repo();
        let id = repo.all()[0].id;
        let service = service(repo.clone(), Arc::new(StubAddresses::succeeding()));

        service.delete(id).await.unwrap();
        assert_eq!(repo.all().len(), 1);
    }
}
