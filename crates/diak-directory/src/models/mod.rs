//! Directory API Data Models
//!
//! Request/response DTOs for the student endpoints.

mod student;

pub use student::*;
