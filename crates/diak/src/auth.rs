//! HTTP Basic Credential Gate
//!
//! Shared by both services with different postures: the Address
//! Service mounts `require_basic_auth` on its endpoint (mandatory),
//! while the Directory Service never enforces it and only forwards
//! the observed header downstream.
//!
//! The expected pair is injected as middleware state rather than held
//! in a process-wide static, so gated routers stay independently
//! testable.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Expected user/password pair from service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub user: String,
    pub password: String,
}

impl CredentialPair {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, user: &str, password: &str) -> bool {
        self.user == user && self.password == password
    }
}

/// Parse an `Authorization: Basic <base64>` header value into a
/// user/password pair. Returns None for any other scheme or shape.
pub fn parse_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Gate state injected into the auth middleware
#[derive(Clone)]
pub struct CredentialGate {
    expected: Arc<CredentialPair>,
}

impl CredentialGate {
    pub fn new(expected: CredentialPair) -> Self {
        Self {
            expected: Arc::new(expected),
        }
    }

    /// Check a raw Authorization header value against the expected
    /// pair. On rejection, returns the attempted user name when one
    /// could be parsed out of the header.
    pub fn check(&self, header_value: Option<&str>) -> Result<(), Option<String>> {
        let Some(value) = header_value else {
            return Err(None);
        };
        let Some((user, password)) = parse_basic(value) else {
            return Err(None);
        };
        if self.expected.matches(&user, &password) {
            Ok(())
        } else {
            Err(Some(user))
        }
    }
}

/// Mandatory Basic auth middleware.
///
/// Rejections short-circuit before the gated handler runs and are
/// logged with the caller's origin and attempted identity. The
/// rejected secret is never logged.
pub async fn require_basic_auth(
    State(gate): State<CredentialGate>,
    request: Request,
    next: Next,
) -> Response {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match gate.check(header_value) {
        Ok(()) => next.run(request).await,
        Err(attempted_user) => {
            let origin = request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.to_string());
            tracing::warn!(
                origin = origin.as_deref().unwrap_or("unknown"),
                user = attempted_user.as_deref().unwrap_or("-"),
                "Rejected credentials"
            );
            unauthorized()
        }
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"diak\"")],
        Json(serde_json::json!({ "message": "Unauthorized" })),
    )
        .into_response()
}
