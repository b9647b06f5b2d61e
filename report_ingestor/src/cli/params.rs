use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use chrono::{Days, NaiveDate};

use crate::{
    auth::{AuthError, Credentials},
    config::{ConfigError, DEFAULT_CONFIG_FILE, IngestorConfig, load_config_path},
    models::{
        frequency::Frequency,
        range_token::{RangeTokenError, parse_range_token},
        time_range::TimeRange,
    },
};

/// Resolves `-d`. Without a token the range is the single day before `today`.
pub fn resolve_range(token: Option<&str>, today: NaiveDate) -> Result<TimeRange, RangeTokenError> {
    match token {
        Some(token) => parse_range_token(token),
        None => {
            let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
            Ok(TimeRange::new(yesterday, yesterday, Frequency::Daily))
        }
    }
}

/// An explicit path must exist. Otherwise `report_ingestor.toml` in the
/// working directory is used when present, and defaults when not.
pub fn load_config(path: Option<&Path>) -> Result<IngestorConfig, ConfigError> {
    match path {
        Some(path) => load_config_path(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => load_config_path(DEFAULT_CONFIG_FILE),
        None => IngestorConfig::default().validate(),
    }
}

/// Explicit file first, then the configured credentials file if it exists,
/// then the `ASC_*` environment variables.
pub fn load_credentials(
    explicit: Option<&Path>,
    config: &IngestorConfig,
) -> Result<Credentials, AuthError> {
    if let Some(path) = explicit {
        return Credentials::from_file(path);
    }
    if config.credentials_path.is_file() {
        return Credentials::from_file(&config.credentials_path);
    }
    Credentials::from_env()
}

/// Writes rendered bytes verbatim to `out`, or to stdout.
pub fn write_output(bytes: &[u8], out: Option<&Path>) -> io::Result<()> {
    match out {
        Some(path) => fs::write(path, bytes),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()
        }
    }
}
