pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{apify::ApifyClient, nocodb::NocoDbClient};
pub use config::ServiceConfig;
pub use crate::core::sync::{SyncEngine, SyncOutcome};
pub use server::{build_engine, AppState};
pub use utils::error::{Result, SyncError};
