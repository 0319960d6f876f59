//! Address Service Configuration

use anyhow::{Context, Result};

use diak::CredentialPair;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub credentials: CredentialPair,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = env_or("PORT", "3001")
            .parse()
            .context("PORT must be a number")?;
        let credentials = CredentialPair::new(
            env_or("AUTH_USER", "admin"),
            env_or("AUTH_PASSWORD", "admin123"),
        );

        Ok(Self { port, credentials })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
