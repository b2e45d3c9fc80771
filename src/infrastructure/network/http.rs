// HTTP client utilities
use crate::domain::error::TrqError;
use reqwest::Client;
use std::time::Duration;

/// Create the shared HTTP client. Per-request timeouts are set by callers;
/// the 30s client default is only a safety net for calls that forget one.
pub fn create_client() -> Result<Client, TrqError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("trq/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
