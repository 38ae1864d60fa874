#[cfg(feature = "lambda")]
use apify_nocodb_sync::server::run_app::RunAppResponse;
#[cfg(feature = "lambda")]
use apify_nocodb_sync::server::DefaultEngine;
#[cfg(feature = "lambda")]
use apify_nocodb_sync::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use apify_nocodb_sync::{build_engine, ServiceConfig, SyncOutcome};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use std::sync::Arc;

/// Every invocation runs one sync; the event payload is ignored.
#[cfg(feature = "lambda")]
async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
    engine: &DefaultEngine,
) -> Result<RunAppResponse, Error> {
    tracing::info!("Sync triggered by Lambda request {}", event.context.request_id);

    let outcome = SyncOutcome::from_result(engine.run().await);
    let response = RunAppResponse::from(&outcome);

    if outcome.is_success() {
        Ok(response)
    } else {
        let detail = match &outcome {
            SyncOutcome::SaveFailed { reason } => reason.clone(),
            other => other.message().unwrap_or(other.status()).to_string(),
        };
        Err(format!("{}: {}", response.status, detail).into())
    }
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // Built once per cold start and shared by every invocation.
    let config = ServiceConfig::from_env()?;
    config.validate()?;
    let engine = Arc::new(build_engine(&config)?);

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let engine = Arc::clone(&engine);
        async move { function_handler(event, &engine).await }
    }))
    .await
}
