use std::time::Duration;

use crate::error::{ChartError, ChartResult};

pub const API_URL_ENV: &str = "TICKER_CHART_API_URL";
pub const API_KEY_ENV: &str = "TICKER_CHART_API_KEY";
pub const TIMEOUT_ENV: &str = "TICKER_CHART_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// Endpoint and credential for the stock data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> ChartResult<Self> {
        let config = Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from process environment variables.
    pub fn from_env() -> ChartResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> ChartResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(API_URL_ENV).unwrap_or_default();
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();
        let mut config = Self {
            endpoint: endpoint.trim().to_owned(),
            api_key: api_key.trim().to_owned(),
            timeout: DEFAULT_TIMEOUT,
        };
        config.validate()?;

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|raw| !raw.trim().is_empty()) {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                ChartError::Configuration(format!("{TIMEOUT_ENV} must be whole seconds, got `{raw}`"))
            })?;
            config.timeout = Duration::from_secs(seconds);
        }
        Ok(config)
    }

    fn validate(&self) -> ChartResult<()> {
        if self.endpoint.is_empty() || self.api_key.is_empty() {
            return Err(ChartError::Configuration(format!(
                "API URL or API key is not defined ({API_URL_ENV}, {API_KEY_ENV})"
            )));
        }
        Ok(())
    }
}
