//! Observation port
//!
//! Defines the interface for fetching raw observation series. Implementations
//! fail soft: a failed request and a response without data both surface as
//! `None`, and the implementation is responsible for logging the failure.

use async_trait::async_trait;
use domain::{ObservationParameter, ObservationPeriod, StationId};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// One upstream observation: epoch-millisecond timestamp plus the value as
/// the decimal string SMHI sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedValue {
    /// Observation time in milliseconds since the Unix epoch (UTC)
    pub date: i64,
    /// Raw decimal string, e.g. `"15.2"`
    pub value: Option<String>,
}

impl ObservedValue {
    /// Create a new observed value
    pub fn new(date: i64, value: impl Into<String>) -> Self {
        Self {
            date,
            value: Some(value.into()),
        }
    }
}

/// Series for one station inside an all-stations response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSeries {
    /// Station key as sent upstream (a decimal station number)
    pub key: Option<String>,
    /// Observed values, most recent first
    pub values: Vec<ObservedValue>,
}

impl StationSeries {
    /// Create a new station series
    pub fn new(key: impl Into<String>, values: Vec<ObservedValue>) -> Self {
        Self {
            key: Some(key.into()),
            values,
        }
    }
}

/// Port for observation data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObservationPort: Send + Sync {
    /// Get the series of `parameter` for one station
    ///
    /// Returns `None` when the request failed or the response was unusable.
    async fn station_series(
        &self,
        parameter: ObservationParameter,
        station_id: StationId,
        period: ObservationPeriod,
    ) -> Option<Vec<ObservedValue>>;

    /// Get the latest-hour series of `parameter` for all stations
    ///
    /// Returns `None` when the request failed or the response was unusable.
    async fn station_set_series(
        &self,
        parameter: ObservationParameter,
    ) -> Option<Vec<StationSeries>>;

    /// Check if the observation source is reachable
    async fn is_available(&self) -> bool;
}
