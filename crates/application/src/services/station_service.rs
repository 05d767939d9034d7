//! Station service
//!
//! Reads the latest temperature and wind gust for one station or for all
//! stations and merges them into [`StationReading`]s.
//!
//! Failures never propagate to the caller: the observation port has already
//! logged transport problems, this service logs missing data as a warning and
//! normalization problems as an error, and answers with no reading.

use std::sync::Arc;

use domain::{ObservationParameter, ObservationPeriod, StationId, StationReading};
use tracing::{error, info, instrument, warn};

use crate::{
    ports::{ObservationPort, ObservedValue, StationSeries},
    services::reading_composer::{compose_reading, join_station_sets},
};

/// Service merging temperature and wind gust observations
pub struct StationService {
    observations: Arc<dyn ObservationPort>,
}

impl std::fmt::Debug for StationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationService")
            .field("observations", &"<ObservationPort>")
            .finish()
    }
}

impl StationService {
    /// Create a new station service
    pub fn new(observations: Arc<dyn ObservationPort>) -> Self {
        Self { observations }
    }

    /// Latest reading for a single station
    ///
    /// Issues the temperature request, then the wind gust request. Returns
    /// `None` if either series is missing or empty, or a value is malformed.
    #[instrument(skip(self), fields(station = %station_id, period = %period))]
    pub async fn station_reading(
        &self,
        station_id: StationId,
        period: ObservationPeriod,
    ) -> Option<StationReading> {
        let temperature = self
            .observations
            .station_series(ObservationParameter::Temperature, station_id, period)
            .await;
        let wind_gust = self
            .observations
            .station_series(ObservationParameter::WindGust, station_id, period)
            .await;

        let (Some(temperature), Some(wind_gust)) = (first(temperature), first(wind_gust)) else {
            warn!("Invalid response from SMHI for station {station_id}");
            return None;
        };

        match compose_reading(station_id, &temperature, &wind_gust) {
            Ok(reading) => Some(reading),
            Err(e) => {
                error!(error = %e, "Error fetching data for station {station_id}");
                None
            },
        }
    }

    /// Latest-hour readings for every station reporting both parameters
    ///
    /// Output order follows the upstream temperature series.
    #[instrument(skip(self))]
    pub async fn all_station_readings(&self) -> Vec<StationReading> {
        let temperature = self
            .observations
            .station_set_series(ObservationParameter::Temperature)
            .await;
        let wind_gust = self
            .observations
            .station_set_series(ObservationParameter::WindGust)
            .await;

        let (Some(temperature), Some(wind_gust)) = (non_empty(temperature), non_empty(wind_gust))
        else {
            warn!("Invalid response from SMHI for all stations endpoint");
            return Vec::new();
        };

        match join_station_sets(&temperature, &wind_gust) {
            Ok(readings) => {
                info!(
                    count = readings.len(),
                    "Retrieved {} stations with both temperature and wind gust data",
                    readings.len()
                );
                readings
            },
            Err(e) => {
                error!(error = %e, "Error fetching all stations data from SMHI");
                Vec::new()
            },
        }
    }

    /// Check if the observation source is reachable
    pub async fn is_available(&self) -> bool {
        self.observations.is_available().await
    }
}

fn first(series: Option<Vec<ObservedValue>>) -> Option<ObservedValue> {
    series?.into_iter().next()
}

fn non_empty(series: Option<Vec<StationSeries>>) -> Option<Vec<StationSeries>> {
    series.filter(|s| !s.is_empty())
}
