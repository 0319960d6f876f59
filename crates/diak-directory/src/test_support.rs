//! In-memory port implementations for unit and router tests.
//!
//! `InMemoryStudents` mirrors the Postgres adapter's contract,
//! including reporting email collisions as `DomainError::Conflict`
//! the way the unique index does.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use uuid::Uuid;

use diak::{
    AddressFetchError, AddressPayload, AddressProvider, DomainError, Student, StudentRepository,
};

#[derive(Default)]
pub struct InMemoryStudents {
    rows: Mutex<Vec<Student>>,
    fail: bool,
}

impl InMemoryStudents {
    /// A repository whose every call reports a storage fault.
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn seed(&self, student: Student) {
        self.rows.lock().unwrap().push(student);
    }

    pub fn all(&self) -> Vec<Student> {
        self.rows.lock().unwrap().clone()
    }

    fn guard(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Repository("simulated storage fault".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudents {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        self.guard()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, DomainError> {
        self.guard()?;
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, student: &Student) -> Result<Student, DomainError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|s| s.email == student.email) {
            return Err(DomainError::Conflict);
        }
        rows.push(student.clone());
        Ok(student.clone())
    }

    async fn update(&self, student: &Student) -> Result<Student, DomainError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|s| s.id != student.id && s.email == student.email)
        {
            return Err(DomainError::Conflict);
        }
        let row = rows
            .iter_mut()
            .find(|s| s.id == student.id)
            .ok_or_else(|| DomainError::not_found("Student", student.id))?;
        *row = student.clone();
        Ok(student.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        Ok(rows.len() < before)
    }
}

/// What the stub provider does on each fetch
pub enum ProviderBehavior {
    Succeed,
    Unauthorized,
    Unreachable,
}

pub struct StubAddresses {
    behavior: ProviderBehavior,
    payload: AddressPayload,
    calls: AtomicUsize,
    last_authorization: Mutex<Option<String>>,
}

impl StubAddresses {
    pub fn succeeding() -> Self {
        Self::with_behavior(ProviderBehavior::Succeed)
    }

    pub fn with_behavior(behavior: ProviderBehavior) -> Self {
        Self {
            behavior,
            payload: AddressPayload {
                id: Uuid::new_v4(),
                address: "Kossuth utca 1, Budapest".to_string(),
            },
            calls: AtomicUsize::new(0),
            last_authorization: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payload(&self) -> AddressPayload {
        self.payload.clone()
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressProvider for StubAddresses {
    async fn fetch(&self, authorization: &str) -> Result<AddressPayload, AddressFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_authorization.lock().unwrap() = Some(authorization.to_string());
        match self.behavior {
            ProviderBehavior::Succeed => Ok(self.payload.clone()),
            ProviderBehavior::Unauthorized => Err(AddressFetchError::Unauthorized),
            ProviderBehavior::Unreachable => Err(AddressFetchError::Transport(
                "connection refused".to_string(),
            )),
        }
    }
}
