use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to fetch data from Apify: upstream returned status {status}")]
    UpstreamFetch { status: u16 },

    #[error("Failed to fetch data from Apify: {0}")]
    UpstreamRequest(#[source] reqwest::Error),

    #[error("Failed to save data to NocoDB: downstream returned status {status}")]
    DownstreamSave { status: u16 },

    #[error("Failed to save data to NocoDB: {0}")]
    DownstreamRequest(#[source] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Downstream,
    Data,
    Configuration,
    System,
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::UpstreamFetch { .. } | SyncError::UpstreamRequest(_) => {
                ErrorCategory::Upstream
            }
            SyncError::DownstreamSave { .. } | SyncError::DownstreamRequest(_) => {
                ErrorCategory::Downstream
            }
            SyncError::SerializationError(_) => ErrorCategory::Data,
            SyncError::ConfigError { .. }
            | SyncError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SyncError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SyncError::UpstreamFetch { status: 401 | 403 } => {
                "Check that APIFY_TOKEN is valid and has access to the actor"
            }
            SyncError::UpstreamFetch { status: 404 } => {
                "Check that the actor exists and has at least one finished run"
            }
            SyncError::UpstreamFetch { .. } | SyncError::UpstreamRequest(_) => {
                "Check network connectivity to the Apify API and try again"
            }
            SyncError::DownstreamSave { status: 401 | 403 } => {
                "Check that NOCODB_TOKEN is valid for the target base"
            }
            SyncError::DownstreamSave { .. } | SyncError::DownstreamRequest(_) => {
                "Check NOCODB_URL, NOCODB_TABLE_ID and that the table columns match the dataset fields"
            }
            SyncError::SerializationError(_) => {
                "The upstream dataset is not a JSON array of objects; inspect the last actor run"
            }
            SyncError::ConfigError { .. }
            | SyncError::InvalidConfigValueError { .. } => {
                "Fix the configuration (see --help for flags and environment variables)"
            }
            SyncError::IoError(_) => "Check that the listen address is free and reachable",
        }
    }

    /// Process exit code used by the one-shot mode.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Upstream => 2,
            ErrorCategory::Downstream => 3,
            ErrorCategory::Data => 4,
            ErrorCategory::System => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
