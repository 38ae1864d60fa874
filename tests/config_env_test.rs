use apify_nocodb_sync::server::router;
use apify_nocodb_sync::{AppState, ServiceConfig};
use httpmock::prelude::*;

const DATASET_PATH: &str = "/v2/acts/jupri~realtor-agents/runs/last/dataset/items";
const RECORDS_PATH: &str = "/api/v2/tables/tbl_env/records";

// Single test in this binary: it mutates process environment variables.
#[tokio::test]
async fn test_config_is_read_once_from_env() {
    let apify = MockServer::start();
    let nocodb = MockServer::start();

    std::env::set_var("APIFY_TOKEN", "token-at-startup");
    std::env::set_var("NOCODB_TOKEN", "xc-at-startup");
    std::env::set_var("NOCODB_URL", nocodb.address().to_string());
    std::env::set_var("NOCODB_TABLE_ID", "tbl_env");
    std::env::set_var("NOCODB_SCHEME", "http");
    std::env::set_var("APIFY_BASE_URL", apify.base_url());

    let config = ServiceConfig::from_env().unwrap();
    assert_eq!(config.apify_token, "token-at-startup");

    let fetch_mock = apify.mock(|when, then| {
        when.method(GET)
            .path(DATASET_PATH)
            .query_param("token", "token-at-startup");
        then.status(200).json_body(serde_json::json!([{"name": "Jane Doe"}]));
    });
    let save_mock = nocodb.mock(|when, then| {
        when.method(POST)
            .path(RECORDS_PATH)
            .header("xc-token", "xc-at-startup");
        then.status(200);
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::from_config(&config).unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    std::env::set_var("APIFY_TOKEN", "token-after-startup");
    std::env::set_var("NOCODB_TOKEN", "xc-after-startup");
    std::env::set_var("NOCODB_TABLE_ID", "tbl_other");

    let client = reqwest::Client::new();
    for _ in 0..2 {
        let response = client
            .post(format!("http://{}/run-app", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    fetch_mock.assert_hits(2);
    save_mock.assert_hits(2);
}
