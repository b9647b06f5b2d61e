//! Ingestor configuration: parsing, validation, and loading.
//!
//! Configuration lives in an optional TOML file (`report_ingestor.toml` by
//! convention). Every key is optional and unknown keys are rejected:
//!
//! ```toml
//! base_url = "https://api.appstoreconnect.apple.com/v1/"
//! credentials_path = "credentials.yml"
//! requests_per_second = 5
//! timeout_secs = 30
//! token_ttl_secs = 600
//! sales_report_version = "1_0"
//! ```
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]

use std::{
    fs,
    num::NonZeroU32,
    path::{Path, PathBuf},
    time::Duration,
};

use nonzero_ext::nonzero;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.appstoreconnect.apple.com/v1/";
pub const DEFAULT_CONFIG_FILE: &str = "report_ingestor.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestorConfig {
    /// API root; always ends with `/` after validation.
    pub base_url: String,
    /// YAML credentials file tried when none is given on the command line.
    pub credentials_path: PathBuf,
    pub requests_per_second: NonZeroU32,
    pub timeout_secs: u64,
    /// Lifetime of each signed bearer token, at most 1200.
    pub token_ttl_secs: i64,
    /// `filter[version]` sent with sales reports; omitted when unset.
    pub sales_report_version: Option<String>,
}

impl Default for IngestorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials_path: PathBuf::from("credentials.yml"),
            requests_per_second: nonzero!(5u32),
            timeout_secs: 30,
            token_ttl_secs: 600,
            sales_report_version: None,
        }
    }
}

impl IngestorConfig {
    /// Checks ranges and normalizes `base_url` to end with a slash.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "timeout_secs",
                message: "must be greater than zero".into(),
            });
        }
        if !(1..=1200).contains(&self.token_ttl_secs) {
            return Err(ConfigError::Invalid {
                key: "token_ttl_secs",
                message: format!("{} is outside 1..=1200", self.token_ttl_secs),
            });
        }

        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid {
                key: "base_url",
                message: "must not be empty".into(),
            });
        }
        self.base_url = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };

        self.sales_report_version = self
            .sales_report_version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token_ttl_secs)
    }
}

pub fn load_config_str(toml_str: &str) -> Result<IngestorConfig, ConfigError> {
    toml::from_str::<IngestorConfig>(toml_str)?.validate()
}

pub fn load_config_path(path: impl AsRef<Path>) -> Result<IngestorConfig, ConfigError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_config_str(&s)
}
