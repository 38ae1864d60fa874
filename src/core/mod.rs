pub mod sync;

pub use crate::domain::model::{Dataset, Record, SyncReport};
pub use crate::domain::ports::{DatasetSource, RecordSink};
pub use crate::utils::error::Result;
