use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::core::TimeRange;
use crate::error::{ChartError, ChartResult};

use super::{DataProvider, FetchedData, ProviderConfig, decode_response};

/// Blocking HTTP client for the stock endpoint.
///
/// Sends `GET <endpoint>?timerange=<tag>` with a bearer token.
#[derive(Debug, Clone)]
pub struct HttpDataProvider {
    config: ProviderConfig,
    client: Client,
}

impl HttpDataProvider {
    pub fn new(config: ProviderConfig) -> ChartResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ChartError::Transport(format!("failed to build http client: {err}")))?;
        Ok(Self { config, client })
    }

    /// Builds a provider from `TICKER_CHART_*` environment variables.
    pub fn from_env() -> ChartResult<Self> {
        Self::new(ProviderConfig::from_env()?)
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn request_url(&self, range: TimeRange) -> ChartResult<Url> {
        let mut url = Url::parse(&self.config.endpoint).map_err(|err| {
            ChartError::Configuration(format!(
                "invalid API URL `{}`: {err}",
                self.config.endpoint
            ))
        })?;
        url.query_pairs_mut().append_pair("timerange", range.tag());
        Ok(url)
    }
}

impl DataProvider for HttpDataProvider {
    fn fetch(&self, range: TimeRange) -> ChartResult<FetchedData> {
        let url = self.request_url(range)?;
        debug!(%url, range = %range, "requesting stock data");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(|err| ChartError::Transport(format!("stock request failed: {err}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| ChartError::Transport(format!("failed to read stock response: {err}")))?;

        decode_response(status, &body, range).inspect_err(|err| {
            warn!(status, error = %err, "stock data load failed");
        })
    }
}
