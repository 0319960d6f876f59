//! Directory Service Configuration
//!
//! All settings come from the environment; `.env` files are loaded by
//! main before this runs.

use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub address_service_url: String,
    pub address_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = env_or("PORT", "3000")
            .parse()
            .context("PORT must be a number")?;
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is required")?;
        let address_service_url = env_or("ADDRESS_SERVICE_URL", "http://localhost:3001");
        let address_timeout = Duration::from_secs(
            env_or("ADDRESS_TIMEOUT_SECS", "10")
                .parse()
                .context("ADDRESS_TIMEOUT_SECS must be a number")?,
        );

        Ok(Self {
            port,
            database_url,
            address_service_url,
            address_timeout,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
