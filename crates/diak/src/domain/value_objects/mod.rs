//! Value Objects
//!
//! Immutable value types used across the domain.

mod credentials;

pub use credentials::*;
