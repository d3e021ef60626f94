//! NDBC realtime report HTTP client.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, instrument};

use crate::domain::{Observation, StationId};

use super::error::NdbcError;
use super::report::parse_observation;

/// Default NDBC host.
pub const DEFAULT_BASE_URL: &str = "https://www.ndbc.noaa.gov";

/// Identity sent with every request.
pub const DEFAULT_USER_AGENT: &str = "GulfOfMaineBuoyMonitor/1.0 (educational)";

/// Upper bound on a whole fetch, connect through last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// Configuration for the NDBC client.
#[derive(Debug, Clone)]
pub struct NdbcConfig {
    /// Scheme and host of the provider, without trailing slash
    pub base_url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl NdbcConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for NdbcConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for NDBC realtime2 station reports.
///
/// Makes exactly one request per call; redirects are not followed and
/// surface as upstream errors. Concurrent calls share the connection pool
/// but are otherwise independent.
#[derive(Debug, Clone)]
pub struct NdbcClient {
    http: reqwest::Client,
    base_url: String,
}

impl NdbcClient {
    /// Create a new NDBC client with the given configuration.
    pub fn new(config: NdbcConfig) -> Result<Self, NdbcError> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| NdbcError::Setup("invalid User-Agent value".to_string()))?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| NdbcError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// URL of a station's realtime report.
    pub fn report_url(&self, station: &StationId) -> String {
        format!(
            "{}/data/realtime2/{}.txt",
            self.base_url,
            station.upstream_code()
        )
    }

    /// Fetch the raw realtime report text for a station.
    #[instrument(skip(self, station), fields(station = %station))]
    pub async fn fetch_report(&self, station: &StationId) -> Result<String, NdbcError> {
        let url = self.report_url(station);
        debug!(%url, "requesting realtime report");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status == StatusCode::NOT_FOUND {
            return Err(NdbcError::NotFound);
        }

        if status != StatusCode::OK {
            return Err(NdbcError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "read report body");

        Ok(body)
    }

    /// Fetch a station's report and parse its newest observation.
    ///
    /// `Ok(None)` means the provider answered but the report held nothing
    /// usable.
    pub async fn latest_observation(
        &self,
        station: &StationId,
    ) -> Result<Option<Observation>, NdbcError> {
        let raw = self.fetch_report(station).await?;
        let observation = parse_observation(&raw, station);
        if observation.is_none() {
            debug!(%station, "report had no usable observation");
        }
        Ok(observation)
    }
}
