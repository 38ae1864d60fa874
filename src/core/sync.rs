use crate::domain::model::SyncReport;
use crate::domain::ports::{DatasetSource, RecordSink};
use crate::utils::error::{ErrorCategory, Result};
use std::time::Instant;

pub const STATUS_SAVED: &str = "Data saved successfully";
pub const STATUS_SAVE_FAILED: &str = "Failed to save data";
pub const STATUS_ERROR: &str = "Error";

/// Runs one fetch-then-forward pass. Holds no mutable state, so one engine serves every request.
pub struct SyncEngine<S: DatasetSource, K: RecordSink> {
    source: S,
    sink: K,
}

impl<S: DatasetSource, K: RecordSink> SyncEngine<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    pub async fn run(&self) -> Result<SyncReport> {
        let started = Instant::now();
        tracing::info!("🚀 Starting sync run");

        let dataset = self.source.fetch().await?;
        tracing::debug!("Forwarding {} records", dataset.len());

        self.sink.forward(&dataset).await?;

        let report = SyncReport {
            records: dataset.len(),
            elapsed: started.elapsed(),
        };
        tracing::info!(
            "✅ Sync run completed: {} records in {:?}",
            report.records,
            report.elapsed
        );
        Ok(report)
    }
}

/// Terminal state of a run as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Saved { records: usize },
    SaveFailed { reason: String },
    Failed { message: String },
}

impl SyncOutcome {
    pub fn from_result(result: Result<SyncReport>) -> Self {
        match result {
            Ok(report) => SyncOutcome::Saved {
                records: report.records,
            },
            Err(e) => {
                tracing::error!(
                    "❌ Sync run failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

                match e.category() {
                    ErrorCategory::Downstream => SyncOutcome::SaveFailed {
                        reason: e.to_string(),
                    },
                    _ => SyncOutcome::Failed {
                        message: e.to_string(),
                    },
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Saved { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            SyncOutcome::Saved { .. } => STATUS_SAVED,
            SyncOutcome::SaveFailed { .. } => STATUS_SAVE_FAILED,
            SyncOutcome::Failed { .. } => STATUS_ERROR,
        }
    }

    /// Only generic failures surface their error text to the caller.
    pub fn message(&self) -> Option<&str> {
        match self {
            SyncOutcome::Failed { message } => Some(message),
            _ => None,
        }
    }
}
