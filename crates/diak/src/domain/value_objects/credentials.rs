//! CallerCredentials - Credential State of an Inbound Request
//!
//! The Directory Service never validates credentials itself; it only
//! observes the Authorization header and forwards it downstream. The
//! state is an explicit tri-state so every branch of the enrichment
//! decision is exhaustively testable.

use axum::http::HeaderValue;

/// Credential state observed on an inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerCredentials {
    /// No Authorization header was present.
    Anonymous,
    /// Header present; the raw value is forwarded verbatim and the
    /// downstream gate decides its fate.
    Forwarded(String),
    /// Header present but not representable as a forwardable string.
    /// Known invalid without a downstream round-trip.
    Unusable,
}

impl CallerCredentials {
    /// Classify the raw Authorization header of a request.
    pub fn from_header(value: Option<&HeaderValue>) -> Self {
        match value {
            None => Self::Anonymous,
            Some(raw) => match raw.to_str() {
                Ok(s) => Self::Forwarded(s.to_string()),
                Err(_) => Self::Unusable,
            },
        }
    }
}
