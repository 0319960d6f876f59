//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between the
//! repository and the downstream address provider.

mod student_service;

pub use student_service::{Enrichment, SkipReason, StudentListing, StudentService};
