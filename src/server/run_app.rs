use crate::core::sync::SyncOutcome;
use crate::server::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunAppResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&SyncOutcome> for RunAppResponse {
    fn from(outcome: &SyncOutcome) -> Self {
        Self {
            status: outcome.status().to_string(),
            message: outcome.message().map(str::to_string),
        }
    }
}

impl IntoResponse for SyncOutcome {
    fn into_response(self) -> Response {
        let code = if self.is_success() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (code, Json(RunAppResponse::from(&self))).into_response()
    }
}

/// `POST /run-app`: pull the latest dataset and push it to the table. Takes no body.
#[tracing::instrument(level = "info", skip_all)]
pub async fn run_app(Extension(state): Extension<Arc<AppState>>) -> SyncOutcome {
    SyncOutcome::from_result(state.engine.run().await)
}
