use crate::adapters::parse_endpoint;
use crate::config::ServiceConfig;
use crate::domain::model::Dataset;
use crate::domain::ports::DatasetSource;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Reads the dataset of the actor's last run from the Apify API.
pub struct ApifyClient {
    client: Client,
    dataset_url: Url,
    token: String,
}

impl ApifyClient {
    pub fn new(client: Client, config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            client,
            dataset_url: parse_endpoint("apify_base_url", &config.dataset_url())?,
            token: config.apify_token.clone(),
        })
    }

    pub fn dataset_url(&self) -> &Url {
        &self.dataset_url
    }
}

#[async_trait]
impl DatasetSource for ApifyClient {
    async fn fetch(&self) -> Result<Dataset> {
        tracing::debug!("📡 Making API request to: {}", self.dataset_url);

        let response = self
            .client
            .get(self.dataset_url.clone())
            .query(&[("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| SyncError::UpstreamRequest(e.without_url()))?;

        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        if !status.is_success() {
            tracing::error!("❌ Apify request failed with status: {}", status);
            return Err(SyncError::UpstreamFetch {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SyncError::UpstreamRequest(e.without_url()))?;
        let dataset: Dataset = serde_json::from_slice(&body)?;

        tracing::info!("📥 Fetched {} records from Apify", dataset.len());
        Ok(dataset)
    }
}
