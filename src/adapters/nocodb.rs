use crate::adapters::parse_endpoint;
use crate::config::ServiceConfig;
use crate::domain::model::Dataset;
use crate::domain::ports::RecordSink;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

pub const TOKEN_HEADER: &str = "xc-token";

/// Inserts records into a NocoDB table through the v2 records endpoint.
pub struct NocoDbClient {
    client: Client,
    records_url: Url,
    token: String,
}

impl NocoDbClient {
    pub fn new(client: Client, config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            client,
            records_url: parse_endpoint("nocodb_url", &config.records_url())?,
            token: config.nocodb_token.clone(),
        })
    }

    pub fn records_url(&self) -> &Url {
        &self.records_url
    }
}

#[async_trait]
impl RecordSink for NocoDbClient {
    async fn forward(&self, dataset: &Dataset) -> Result<()> {
        tracing::debug!(
            "📤 Posting {} records to: {}",
            dataset.len(),
            self.records_url
        );

        let response = self
            .client
            .post(self.records_url.clone())
            .header(TOKEN_HEADER, &self.token)
            .json(dataset)
            .send()
            .await
            .map_err(SyncError::DownstreamRequest)?;

        let status = response.status();
        tracing::debug!("📤 NocoDB response status: {}", status);

        // NocoDB answers 200 for a successful bulk insert; anything else counts as a failed save.
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("❌ NocoDB save failed with status {}: {}", status, body);
            return Err(SyncError::DownstreamSave {
                status: status.as_u16(),
            });
        }

        tracing::info!("💾 Saved {} records to NocoDB", dataset.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use clap::Parser;
    use httpmock::prelude::*;

    const RECORDS_PATH: &str = "/api/v2/tables/tbl_agents/records";

    fn client_for(server: &MockServer) -> NocoDbClient {
        client_for_host(&server.address().to_string())
    }

    fn client_for_host(host: &str) -> NocoDbClient {
        let config = ServiceConfig::try_parse_from([
            "apify-nocodb-sync",
            "--apify-token",
            "unused",
            "--nocodb-token",
            "nocodb-test-token",
            "--nocodb-url",
            host,
            "--nocodb-table-id",
            "tbl_agents",
            "--nocodb-scheme",
            "http",
        ])
        .unwrap();
        NocoDbClient::new(Client::new(), &config).unwrap()
    }

    fn dataset(value: serde_json::Value) -> Dataset {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_forward_posts_records_verbatim_with_token() {
        let server = MockServer::start();
        let payload = serde_json::json!([{"name": "Jane Doe", "license": "12345"}]);

        let save_mock = server.mock(|when, then| {
            when.method(POST)
                .path(RECORDS_PATH)
                .header(TOKEN_HEADER, "nocodb-test-token")
                .header("content-type", "application/json")
                .json_body(payload.clone());
            then.status(200).json_body(serde_json::json!([{"Id": 1}]));
        });

        client_for(&server)
            .forward(&dataset(payload.clone()))
            .await
            .unwrap();

        save_mock.assert();
    }

    #[tokio::test]
    async fn test_forward_body_round_trips_mixed_values() {
        let server = MockServer::start();
        let payload = serde_json::json!([
            {"name": "A", "sales": 12, "rating": 4.5, "active": true, "phone": null},
            {"name": "B", "sales": 0, "rating": 0.0, "active": false, "phone": "555-0100"}
        ]);
        let expected = dataset(payload.clone());

        let save_mock = server.mock(|when, then| {
            when.method(POST).path(RECORDS_PATH).json_body(payload.clone());
            then.status(200);
        });

        client_for(&server).forward(&expected).await.unwrap();

        save_mock.assert();
        let reparsed: Vec<Record> =
            serde_json::from_str(&serde_json::to_string(&expected).unwrap()).unwrap();
        assert_eq!(reparsed, expected);
    }

    #[tokio::test]
    async fn test_forward_empty_dataset_posts_empty_array() {
        let server = MockServer::start();
        let save_mock = server.mock(|when, then| {
            when.method(POST)
                .path(RECORDS_PATH)
                .json_body(serde_json::json!([]));
            then.status(200);
        });

        client_for(&server).forward(&Vec::new()).await.unwrap();
        save_mock.assert();
    }

    #[tokio::test]
    async fn test_forward_server_error_is_not_retried() {
        let server = MockServer::start();
        let save_mock = server.mock(|when, then| {
            when.method(POST).path(RECORDS_PATH);
            then.status(500).body("internal error");
        });

        let err = client_for(&server)
            .forward(&dataset(serde_json::json!([{"name": "Jane Doe"}])))
            .await
            .unwrap_err();

        save_mock.assert_hits(1);
        assert!(matches!(err, SyncError::DownstreamSave { status: 500 }));
    }

    #[tokio::test]
    async fn test_forward_only_200_counts_as_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(RECORDS_PATH);
            then.status(201);
        });

        let err = client_for(&server)
            .forward(&dataset(serde_json::json!([{"name": "Jane Doe"}])))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::DownstreamSave { status: 201 }));
    }

    #[tokio::test]
    async fn test_forward_keeps_integers_beyond_64_bits_exact() {
        let server = MockServer::start();
        let raw = r#"[{"id":123456789012345678901234,"name":"Jane Doe","score":-98765432109876543210}]"#;

        let save_mock = server.mock(|when, then| {
            when.method(POST).path(RECORDS_PATH).body(raw);
            then.status(200);
        });

        let records: Dataset = serde_json::from_str(raw).unwrap();
        client_for(&server).forward(&records).await.unwrap();

        save_mock.assert();
    }

    #[tokio::test]
    async fn test_forward_connection_refused_is_downstream_error() {
        let err = client_for_host("127.0.0.1:1")
            .forward(&dataset(serde_json::json!([{"name": "Jane Doe"}])))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::DownstreamRequest(_)));
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Downstream);
        assert!(!err.to_string().contains("nocodb-test-token"));
    }
}
