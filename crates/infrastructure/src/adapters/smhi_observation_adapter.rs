//! SMHI observation adapter - Implements ObservationPort using integration_smhi

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{ObservationPort, ObservedValue, StationSeries},
};
use async_trait::async_trait;
use domain::{ObservationParameter, ObservationPeriod, StationId};
use integration_smhi::{
    ObservationClient, SmhiClient, SmhiConfig, SmhiError, SmhiStationData, SmhiValue,
};
use tracing::{debug, error, instrument};

/// Adapter for the SMHI metobs API
///
/// Every failed upstream call is logged once at error level and reported to
/// the caller as `None`.
pub struct SmhiObservationAdapter {
    client: Arc<dyn ObservationClient>,
}

impl std::fmt::Debug for SmhiObservationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmhiObservationAdapter")
            .field("client", &"ObservationClient")
            .finish()
    }
}

impl SmhiObservationAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(SmhiConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: SmhiConfig) -> Result<Self, ApplicationError> {
        let client = SmhiClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an existing observation client
    pub fn with_client(client: Arc<dyn ObservationClient>) -> Self {
        Self { client }
    }

    /// Map integration error to application error
    fn map_error(err: SmhiError) -> ApplicationError {
        match err {
            SmhiError::ConnectionFailed(e)
            | SmhiError::RequestFailed(e)
            | SmhiError::NotFound(e)
            | SmhiError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            SmhiError::RateLimitExceeded => {
                ApplicationError::ExternalService("SMHI rate limit exceeded".into())
            },
            SmhiError::ParseError(e) => ApplicationError::InvalidResponse(e),
        }
    }

    fn map_value(value: SmhiValue) -> ObservedValue {
        ObservedValue {
            date: value.date,
            value: value.value,
        }
    }

    fn map_values(values: Vec<SmhiValue>) -> Vec<ObservedValue> {
        values.into_iter().map(Self::map_value).collect()
    }

    fn map_station(station: SmhiStationData) -> StationSeries {
        StationSeries {
            key: station.key,
            values: Self::map_values(station.value.unwrap_or_default()),
        }
    }
}

#[async_trait]
impl ObservationPort for SmhiObservationAdapter {
    #[instrument(skip(self), fields(parameter = parameter.code(), station = %station_id, period = %period))]
    async fn station_series(
        &self,
        parameter: ObservationParameter,
        station_id: StationId,
        period: ObservationPeriod,
    ) -> Option<Vec<ObservedValue>> {
        match self
            .client
            .get_station_data(parameter, station_id, period)
            .await
        {
            Ok(response) => {
                let values = response.value.map(Self::map_values);
                debug!(
                    count = values.as_ref().map_or(0, Vec::len),
                    "Retrieved {} observations",
                    parameter.name()
                );
                values
            },
            Err(e) => {
                error!(
                    error = %Self::map_error(e),
                    "Error calling SMHI API for station {station_id}"
                );
                None
            },
        }
    }

    #[instrument(skip(self), fields(parameter = parameter.code()))]
    async fn station_set_series(
        &self,
        parameter: ObservationParameter,
    ) -> Option<Vec<StationSeries>> {
        match self.client.get_station_set_data(parameter).await {
            Ok(response) => {
                let stations = response
                    .station
                    .map(|stations| stations.into_iter().map(Self::map_station).collect::<Vec<_>>());
                debug!(
                    stations = stations.as_ref().map_or(0, Vec::len),
                    "Retrieved {} station set",
                    parameter.name()
                );
                stations
            },
            Err(e) => {
                error!(
                    error = %Self::map_error(e),
                    "Error calling SMHI API for all stations"
                );
                None
            },
        }
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
