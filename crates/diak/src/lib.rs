//! Diak Domain Library
//!
//! Core domain types and interfaces for the student directory system.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Student, AddressPayload)
//!   - `value_objects/`: Immutable value types (CallerCredentials)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! - **Auth** (`auth.rs`): HTTP Basic credential gate shared by both
//!   services. The Address Service enforces it; the Directory Service
//!   only observes the header and forwards it downstream.

pub mod auth;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use auth::{parse_basic, CredentialGate, CredentialPair};
pub use domain::{
    validate_fields, AddressPayload, CallerCredentials, DomainError, FieldError, Student,
};
pub use ports::{AddressFetchError, AddressProvider, StudentRepository};
