use std::env;
use std::time::Duration;

use eyre::{eyre, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the persistence backend, resolved from the
/// environment at command time.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("SOLACE_BACKEND_URL")
            .map_err(|_| eyre!("SOLACE_BACKEND_URL is not set"))?;
        let api_key = env::var("SOLACE_BACKEND_API_KEY").ok();
        let timeout = env::var("SOLACE_BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            base_url,
            api_key,
            timeout,
        })
    }
}
