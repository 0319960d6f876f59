//! Service Ports
//!
//! Abstract interfaces for external services.

mod address_provider;

pub use address_provider::*;
