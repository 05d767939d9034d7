//! SMHI observation client
//!
//! HTTP client for the SMHI metobs API.

use async_trait::async_trait;
use domain::{ObservationParameter, ObservationPeriod, StationId};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{SmhiResponse, SmhiStationSetResponse};

/// SMHI client errors
#[derive(Debug, Error)]
pub enum SmhiError {
    /// Connection to SMHI failed or timed out
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request was rejected by SMHI
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Station or parameter does not exist upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response from SMHI
    #[error("Parse error: {0}")]
    ParseError(String),

    /// SMHI answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// SMHI client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmhiConfig {
    /// metobs API base URL
    /// (default: <https://opendata-download-metobs.smhi.se/api/version/latest>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://opendata-download-metobs.smhi.se/api/version/latest".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("smhi-weather-gateway/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SmhiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Observation client trait for fetching SMHI data sets
#[async_trait]
pub trait ObservationClient: Send + Sync {
    /// Get the values of `parameter` for a single station
    async fn get_station_data(
        &self,
        parameter: ObservationParameter,
        station_id: StationId,
        period: ObservationPeriod,
    ) -> Result<SmhiResponse, SmhiError>;

    /// Get the latest-hour values of `parameter` for every station
    async fn get_station_set_data(
        &self,
        parameter: ObservationParameter,
    ) -> Result<SmhiStationSetResponse, SmhiError>;

    /// Check if the SMHI API is reachable
    async fn is_healthy(&self) -> bool;
}

/// SMHI HTTP client implementation
#[derive(Debug, Clone)]
pub struct SmhiClient {
    client: Client,
    config: SmhiConfig,
}

impl SmhiClient {
    /// Create a new SMHI client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: SmhiConfig) -> Result<Self, SmhiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SmhiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, SmhiError> {
        Self::new(SmhiConfig::default())
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Build the URL for a single station query
    fn build_station_url(
        &self,
        parameter: ObservationParameter,
        station_id: StationId,
        period: ObservationPeriod,
    ) -> String {
        format!(
            "{}/parameter/{}/station/{}/period/{}/data.json",
            self.base_url(),
            parameter.code(),
            station_id,
            period.as_path_segment()
        )
    }

    /// Build the URL for the all-stations query
    ///
    /// SMHI only serves station sets for `latest-hour`.
    fn build_station_set_url(&self, parameter: ObservationParameter) -> String {
        format!(
            "{}/parameter/{}/station-set/all/period/{}/data.json",
            self.base_url(),
            parameter.code(),
            ObservationPeriod::LatestHour.as_path_segment()
        )
    }

    /// Map a transport error
    fn map_send_error(err: &reqwest::Error) -> SmhiError {
        if err.is_connect() || err.is_timeout() {
            SmhiError::ConnectionFailed(err.to_string())
        } else {
            SmhiError::RequestFailed(err.to_string())
        }
    }

    /// Map a non-success status code
    fn map_status(status: StatusCode, url: &str) -> Option<SmhiError> {
        if status.is_success() {
            return None;
        }
        let err = if status == StatusCode::TOO_MANY_REQUESTS {
            SmhiError::RateLimitExceeded
        } else if status == StatusCode::NOT_FOUND {
            SmhiError::NotFound(url.to_string())
        } else if status.is_server_error() {
            SmhiError::ServiceUnavailable(format!("HTTP {status}"))
        } else {
            SmhiError::RequestFailed(format!("HTTP {status}"))
        };
        Some(err)
    }

    /// GET a URL and decode its JSON body
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SmhiError> {
        debug!(url = %url, "Fetching SMHI data");

        let response: Response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        if let Some(err) = Self::map_status(response.status(), url) {
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SmhiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ObservationClient for SmhiClient {
    #[instrument(skip(self), fields(parameter = parameter.code(), station = %station_id, period = %period))]
    async fn get_station_data(
        &self,
        parameter: ObservationParameter,
        station_id: StationId,
        period: ObservationPeriod,
    ) -> Result<SmhiResponse, SmhiError> {
        let url = self.build_station_url(parameter, station_id, period);
        self.fetch_json(&url).await
    }

    #[instrument(skip(self), fields(parameter = parameter.code()))]
    async fn get_station_set_data(
        &self,
        parameter: ObservationParameter,
    ) -> Result<SmhiStationSetResponse, SmhiError> {
        let url = self.build_station_set_url(parameter);
        self.fetch_json(&url).await
    }

    async fn is_healthy(&self) -> bool {
        let url = format!(
            "{}/parameter/{}.json",
            self.base_url(),
            ObservationParameter::Temperature.code()
        );
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "SMHI health check failed");
                false
            },
        }
    }
}
