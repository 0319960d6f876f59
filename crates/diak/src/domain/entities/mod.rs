//! Domain Entities
//!
//! - Student: persisted directory entry
//! - AddressPayload: transient address attached to list responses

mod address;
mod student;

pub use address::*;
pub use student::*;
