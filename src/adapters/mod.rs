// Adapters layer: concrete HTTP clients for the upstream dataset API and the downstream table API.

pub mod apify;
pub mod nocodb;

use crate::config::ServiceConfig;
use crate::utils::error::{Result, SyncError};
use reqwest::Client;

/// One client shared by both adapters; reqwest clients are cheap to clone.
pub fn build_http_client(config: &ServiceConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| SyncError::ConfigError {
        message: format!("Failed to build HTTP client: {}", e),
    })
}

fn parse_endpoint(field: &str, endpoint: &str) -> Result<url::Url> {
    url::Url::parse(endpoint).map_err(|e| SyncError::InvalidConfigValueError {
        field: field.to_string(),
        value: endpoint.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}
