//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod address_client;
pub mod postgres;

// Re-exports
pub use address_client::HttpAddressProvider;
pub use postgres::PgStudentRepository;
