//! AddressPayload - Transient Enrichment Data
//!
//! Generated once per Address Service call. Never persisted and never
//! tied to a Student beyond the single response embedding it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated postal address with its per-request identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPayload {
    pub id: Uuid,
    pub address: String,
}
