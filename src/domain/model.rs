use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One scraped entity, passed through untouched.
///
/// Serializes as the bare JSON object it was read from; field order is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }
}

pub type Dataset = Vec<Record>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub records: usize,
    pub elapsed: Duration,
}
