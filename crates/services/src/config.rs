use std::env;
use std::time::Duration;

use finder_core::model::Region;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_BATCH_SIZE: usize = 20;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime knobs for the catalog services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinderConfig {
    pub api_base_url: String,
    pub batch_size: usize,
    pub request_timeout: Duration,
    pub region: Region,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            request_timeout: DEFAULT_TIMEOUT,
            region: Region::default(),
        }
    }
}

impl FinderConfig {
    /// Read `FINDER_API_BASE_URL`, `FINDER_BATCH_SIZE`, `FINDER_TIMEOUT_SECS`
    /// and `FINDER_REGION`, falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("FINDER_API_BASE_URL") {
            config.api_base_url = parse_base_url(&raw)?;
        }
        if let Some(raw) = lookup("FINDER_BATCH_SIZE") {
            config.batch_size = parse_batch_size(&raw)?;
        }
        if let Some(raw) = lookup("FINDER_TIMEOUT_SECS") {
            config.request_timeout = parse_timeout_secs(&raw)?;
        }
        if let Some(raw) = lookup("FINDER_REGION") {
            config.region = raw.parse()?;
        }

        Ok(config)
    }
}

/// # Errors
///
/// Returns `ConfigError::EmptyBaseUrl` for blank input.
pub fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    Ok(trimmed.to_string())
}

/// # Errors
///
/// Returns `ConfigError::InvalidBatchSize` unless `raw` is a positive integer.
pub fn parse_batch_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidBatchSize {
            raw: raw.to_string(),
        }),
    }
}

/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` unless `raw` is a positive number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            raw: raw.to_string(),
        }),
    }
}
