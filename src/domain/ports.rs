use crate::domain::model::Dataset;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a sync run reads its records from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Dataset>;
}

/// Where a sync run writes its records to. All-or-nothing: one call per dataset.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn forward(&self, dataset: &Dataset) -> Result<()>;
}
