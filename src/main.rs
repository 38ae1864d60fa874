use apify_nocodb_sync::utils::{logger, validation::Validate};
use apify_nocodb_sync::{build_engine, AppState, ServiceConfig, SyncOutcome};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting apify-nocodb-sync");
    if config.verbose {
        tracing::debug!("Service config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    if config.once {
        let engine = build_engine(&config)?;
        let result = engine.run().await;
        let exit_code = result.as_ref().err().map(|e| e.exit_code());

        let outcome = SyncOutcome::from_result(result);
        match &outcome {
            SyncOutcome::Saved { records } => {
                println!("✅ {} ({} records)", outcome.status(), records);
            }
            SyncOutcome::SaveFailed { reason } => {
                eprintln!("❌ {}: {}", outcome.status(), reason);
            }
            SyncOutcome::Failed { message } => {
                eprintln!("❌ {}: {}", outcome.status(), message);
            }
        }

        if let Some(code) = exit_code {
            std::process::exit(code);
        }
        return Ok(());
    }

    let addr = config.listen_addr()?;
    let state = AppState::from_config(&config)?;
    apify_nocodb_sync::server::serve(addr, state).await?;

    Ok(())
}
