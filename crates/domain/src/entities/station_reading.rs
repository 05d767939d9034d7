//! Station reading entity
//!
//! A merged observation for one station: the latest temperature and wind
//! gust values, stamped with the temperature observation time.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::value_objects::StationId;

/// Latest temperature and wind gust for a single station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading {
    /// Station the values were observed at
    pub station_id: StationId,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Wind gust speed in metres per second
    pub wind_gust: f64,
    /// Observation time of the temperature value, in local time
    pub timestamp: DateTime<Local>,
}

impl StationReading {
    /// Create a new reading
    pub const fn new(
        station_id: StationId,
        temperature: f64,
        wind_gust: f64,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            station_id,
            temperature,
            wind_gust,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample() -> StationReading {
        let timestamp = Local.timestamp_millis_opt(1_729_417_200_000).unwrap();
        StationReading::new(StationId::new(159_880).unwrap(), 15.2, 5.3, timestamp)
    }

    #[test]
    fn new_keeps_values() {
        let reading = sample();
        assert_eq!(reading.station_id.value(), 159_880);
        assert!((reading.temperature - 15.2).abs() < f64::EPSILON);
        assert!((reading.wind_gust - 5.3).abs() < f64::EPSILON);
        assert_eq!(reading.timestamp.timestamp_millis(), 1_729_417_200_000);
    }

    #[test]
    fn serializes_station_id_as_number() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["station_id"], 159_880);
        assert_eq!(json["temperature"], 15.2);
    }

    #[test]
    fn serde_roundtrip_preserves_instant() {
        let reading = sample();
        let json = serde_json::to_string(&reading).unwrap();
        let parsed: StationReading = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reading);
    }
}
