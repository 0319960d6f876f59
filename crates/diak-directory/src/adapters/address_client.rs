//! HTTP Address Provider
//!
//! Fetches one generated address from the Address Service using
//! reqwest, forwarding the caller's Authorization header verbatim.
//! The request is bounded by a configurable timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};

use diak::{AddressFetchError, AddressPayload, AddressProvider};

/// HTTP implementation of AddressProvider
pub struct HttpAddressProvider {
    client: Client,
    base_url: String,
}

impl HttpAddressProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AddressProvider for HttpAddressProvider {
    async fn fetch(&self, authorization: &str) -> Result<AddressPayload, AddressFetchError> {
        let response = self
            .client
            .get(format!("{}/api/address", self.base_url))
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| AddressFetchError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(AddressFetchError::Unauthorized),
            status if status.is_success() => response
                .json::<AddressPayload>()
                .await
                .map_err(|e| AddressFetchError::InvalidResponse(e.to_string())),
            status => Err(AddressFetchError::InvalidResponse(format!(
                "unexpected status {status}"
            ))),
        }
    }
}
