use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_APIFY_BASE_URL: &str = "https://api.apify.com";
pub const DEFAULT_APIFY_ACTOR: &str = "jupri~realtor-agents";

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Clone, Parser)]
#[command(name = "apify-nocodb-sync")]
#[command(about = "Copies the latest Apify dataset into a NocoDB table on demand")]
pub struct ServiceConfig {
    #[arg(long, env = "APIFY_TOKEN", hide_env_values = true)]
    pub apify_token: String,

    #[arg(long, env = "NOCODB_TOKEN", hide_env_values = true)]
    pub nocodb_token: String,

    /// NocoDB host, e.g. app.nocodb.com or localhost:8080
    #[arg(long, env = "NOCODB_URL")]
    pub nocodb_url: String,

    #[arg(long, env = "NOCODB_TABLE_ID")]
    pub nocodb_table_id: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long, env = "APIFY_BASE_URL", default_value = DEFAULT_APIFY_BASE_URL)]
    pub apify_base_url: String,

    #[arg(long, env = "APIFY_ACTOR", default_value = DEFAULT_APIFY_ACTOR)]
    pub apify_actor: String,

    #[arg(long, env = "NOCODB_SCHEME", default_value = "https")]
    pub nocodb_scheme: String,

    /// Timeout for each outbound request; unset means the HTTP client default
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, env = "LOG_JSON", help = "Emit JSON log lines")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Run a single sync and exit instead of serving HTTP")]
    pub once: bool,
}

impl ServiceConfig {
    /// Builds the config from environment variables only, ignoring argv.
    pub fn from_env() -> Result<Self> {
        Self::try_parse_from(["apify-nocodb-sync"]).map_err(|e| SyncError::ConfigError {
            message: e.to_string(),
        })
    }

    pub fn dataset_url(&self) -> String {
        format!(
            "{}/v2/acts/{}/runs/last/dataset/items",
            self.apify_base_url.trim_end_matches('/'),
            self.apify_actor
        )
    }

    pub fn records_url(&self) -> String {
        format!(
            "{}://{}/api/v2/tables/{}/records",
            self.nocodb_scheme, self.nocodb_url, self.nocodb_table_id
        )
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| SyncError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: format!("Invalid listen address: {}", e),
            })
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("apify_token", &"<redacted>")
            .field("nocodb_token", &"<redacted>")
            .field("nocodb_url", &self.nocodb_url)
            .field("nocodb_table_id", &self.nocodb_table_id)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("apify_base_url", &self.apify_base_url)
            .field("apify_actor", &self.apify_actor)
            .field("nocodb_scheme", &self.nocodb_scheme)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_json", &self.log_json)
            .field("verbose", &self.verbose)
            .field("once", &self.once)
            .finish()
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("apify_token", &self.apify_token)?;
        validation::validate_non_empty_string("nocodb_token", &self.nocodb_token)?;
        validation::validate_non_empty_string("nocodb_table_id", &self.nocodb_table_id)?;
        validation::validate_non_empty_string("apify_actor", &self.apify_actor)?;

        validation::validate_url("apify_base_url", &self.apify_base_url)?;
        validation::validate_scheme("nocodb_scheme", &self.nocodb_scheme)?;
        validation::validate_host("nocodb_url", &self.nocodb_url)?;

        if let Some(secs) = self.request_timeout_secs {
            validation::validate_range("request_timeout_secs", secs, 1, 3600)?;
        }

        self.listen_addr()?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
