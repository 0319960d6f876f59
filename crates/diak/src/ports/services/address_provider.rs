//! Address Provider Port
//!
//! Abstract interface for the downstream Address Service. Every
//! failure mode here degrades the list response rather than failing
//! it; the distinction between variants exists for logs and tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AddressPayload;

/// Failure modes of a single enrichment fetch
#[derive(Debug, Error)]
pub enum AddressFetchError {
    #[error("address service rejected the forwarded credentials")]
    Unauthorized,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected address service response: {0}")]
    InvalidResponse(String),
}

/// Interface for fetching one generated address
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Fetch one address, forwarding the caller's Authorization
    /// header value verbatim.
    async fn fetch(&self, authorization: &str) -> Result<AddressPayload, AddressFetchError>;
}
