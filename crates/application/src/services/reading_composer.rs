//! Reading composition
//!
//! Normalizes raw observation values and joins temperature and wind gust
//! series into [`StationReading`]s.
//!
//! Rules:
//! - only the first (most recent) value of each series is used
//! - decimals always use `.` as separator, whatever the host locale
//! - the reading timestamp is the temperature observation time in local time
//! - the all-stations join is an inner join on the station key; keys of
//!   series with values must be present, and unique on the wind gust side

use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone};
use domain::{DomainError, StationId, StationReading};

use crate::{
    error::ApplicationError,
    ports::{ObservedValue, StationSeries},
};

/// Parse an upstream decimal string
///
/// Surrounding whitespace is ignored. Missing, malformed and non-finite
/// values are rejected.
pub fn parse_decimal(raw: Option<&str>) -> Result<f64, DomainError> {
    let raw = raw.ok_or_else(|| DomainError::InvalidMeasurement("missing value".to_string()))?;
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| DomainError::InvalidMeasurement(raw.to_string()))?;
    if !value.is_finite() {
        return Err(DomainError::InvalidMeasurement(raw.to_string()));
    }
    Ok(value)
}

/// Convert epoch milliseconds to a local timestamp
pub fn local_time_from_millis(millis: i64) -> Result<DateTime<Local>, DomainError> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .ok_or(DomainError::InvalidTimestamp(millis))
}

/// Build a reading from the first temperature and wind gust values
pub fn compose_reading(
    station_id: StationId,
    temperature: &ObservedValue,
    wind_gust: &ObservedValue,
) -> Result<StationReading, ApplicationError> {
    let temperature_celsius = parse_decimal(temperature.value.as_deref())?;
    let wind_gust_mps = parse_decimal(wind_gust.value.as_deref())?;
    let timestamp = local_time_from_millis(temperature.date)?;

    Ok(StationReading::new(
        station_id,
        temperature_celsius,
        wind_gust_mps,
        timestamp,
    ))
}

fn missing_key(parameter: &str) -> ApplicationError {
    ApplicationError::InvalidResponse(format!("{parameter} station without key"))
}

/// Index the wind gust series by station key
///
/// Stations without values are left out. Among the rest every entry must
/// carry a key and no key may repeat; either defect rejects the payload.
fn index_wind_series(
    wind_gust: &[StationSeries],
) -> Result<HashMap<&str, &ObservedValue>, ApplicationError> {
    let mut index = HashMap::with_capacity(wind_gust.len());

    for series in wind_gust {
        let Some(first) = series.values.first() else {
            continue;
        };
        let key = series
            .key
            .as_deref()
            .ok_or_else(|| missing_key("wind gust"))?;
        if index.insert(key, first).is_some() {
            return Err(ApplicationError::InvalidResponse(format!(
                "duplicate wind gust station key {key}"
            )));
        }
    }

    Ok(index)
}

/// Inner-join all-stations series by station key
///
/// Stations missing from either side, or with no values on either side, are
/// skipped. Output order follows `temperature`. A keyless entry with values
/// on either side, or a repeated wind gust key with values, fails the join.
pub fn join_station_sets(
    temperature: &[StationSeries],
    wind_gust: &[StationSeries],
) -> Result<Vec<StationReading>, ApplicationError> {
    let wind_by_station = index_wind_series(wind_gust)?;

    let mut readings = Vec::new();
    for series in temperature {
        let Some(temperature_value) = series.values.first() else {
            continue;
        };
        let key = series
            .key
            .as_deref()
            .ok_or_else(|| missing_key("temperature"))?;
        let Some(wind_value) = wind_by_station.get(key) else {
            continue;
        };

        let station_id = StationId::parse(key)?;
        readings.push(compose_reading(station_id, temperature_value, wind_value)?);
    }

    Ok(readings)
}
