//! Station reading handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use domain::{ObservationPeriod, StationId, StationReading};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{ApiError, STATION_DATA_UNAVAILABLE},
    state::AppState,
};

/// Merged reading for one station
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "stationId": 159880,
    "temperature": 15.2,
    "windGust": 5.3,
    "timestamp": "2024-10-20T11:40:00+02:00"
}))]
pub struct StationReadingResponse {
    /// SMHI station number
    pub station_id: u32,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Wind gust in metres per second
    pub wind_gust: f64,
    /// Observation time (RFC 3339, server local offset)
    pub timestamp: String,
}

impl From<StationReading> for StationReadingResponse {
    fn from(reading: StationReading) -> Self {
        Self {
            station_id: reading.station_id.value(),
            temperature: reading.temperature,
            wind_gust: reading.wind_gust,
            timestamp: reading.timestamp.to_rfc3339(),
        }
    }
}

/// Query parameters for the single-station endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// `hour` (default) for the latest hour, `day` for the latest day
    pub period: Option<String>,
}

impl PeriodQuery {
    fn parse(&self) -> Result<ObservationPeriod, ApiError> {
        match self.period.as_deref() {
            None => Ok(ObservationPeriod::default()),
            Some(raw) => Ok(raw.parse::<ObservationPeriod>()?),
        }
    }
}

/// Latest temperature and wind gust for one station
#[utoipa::path(
    get,
    path = "/api/stations/{station_id}",
    tag = "stations",
    params(
        ("station_id" = String, Path, description = "SMHI station number, e.g. 159880"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Reading for the station", body = [StationReadingResponse]),
        (status = 400, description = "Invalid input or no data from SMHI", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse)
    ),
    security(("api_key" = []))
)]
#[instrument(skip(state, query))]
pub async fn get_station(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<StationReadingResponse>>, ApiError> {
    let station_id = StationId::parse(&station_id)?;
    let period = query.parse()?;

    let reading = state
        .station_service
        .station_reading(station_id, period)
        .await
        .ok_or_else(|| ApiError::BadRequest(STATION_DATA_UNAVAILABLE.to_string()))?;

    info!(station = %station_id, period = %period, "Station reading served");
    Ok(Json(vec![reading.into()]))
}

/// Latest-hour readings for every station reporting both values
#[utoipa::path(
    get,
    path = "/api/stations",
    tag = "stations",
    responses(
        (status = 200, description = "Readings, possibly empty", body = [StationReadingResponse]),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse)
    ),
    security(("api_key" = []))
)]
#[instrument(skip(state))]
pub async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationReadingResponse>> {
    let readings = state.station_service.all_station_readings().await;
    Json(readings.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;

    #[test]
    fn response_uses_camel_case() {
        let timestamp = Local.timestamp_millis_opt(1_729_417_200_000).unwrap();
        let reading = StationReading::new(StationId::new(159_880).unwrap(), 15.2, 5.3, timestamp);

        let json = serde_json::to_value(StationReadingResponse::from(reading)).unwrap();

        assert_eq!(json["stationId"], 159_880);
        assert_eq!(json["temperature"], 15.2);
        assert_eq!(json["windGust"], 5.3);
        assert!(json["timestamp"].is_string());
        assert!(json.get("station_id").is_none());
    }

    #[test]
    fn timestamp_is_rfc3339_with_offset() {
        let timestamp = Local.timestamp_millis_opt(1_729_417_200_000).unwrap();
        let reading = StationReading::new(StationId::new(1).unwrap(), 0.0, 0.0, timestamp);

        let response = StationReadingResponse::from(reading);
        let parsed = chrono::DateTime::parse_from_rfc3339(&response.timestamp).unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_729_417_200_000);
    }

    #[test]
    fn period_defaults_to_latest_hour() {
        let query = PeriodQuery::default();
        assert_eq!(query.parse().unwrap(), ObservationPeriod::LatestHour);
    }

    #[test]
    fn period_day_maps_to_latest_day() {
        let query = PeriodQuery {
            period: Some("day".to_string()),
        };
        assert_eq!(query.parse().unwrap(), ObservationPeriod::LatestDay);
    }

    #[test]
    fn unknown_period_is_bad_request() {
        let query = PeriodQuery {
            period: Some("week".to_string()),
        };
        assert!(matches!(query.parse(), Err(ApiError::BadRequest(_))));
    }
}
