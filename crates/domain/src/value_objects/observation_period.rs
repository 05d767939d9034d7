//! Observation period value object
//!
//! Selects how far back the upstream series reaches.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Time window requested from SMHI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObservationPeriod {
    /// Values from the latest hour
    #[default]
    #[serde(rename = "hour")]
    LatestHour,
    /// Values from the latest day
    #[serde(rename = "day")]
    LatestDay,
}

impl ObservationPeriod {
    /// Path segment used in SMHI URLs
    pub const fn as_path_segment(&self) -> &'static str {
        match self {
            Self::LatestHour => "latest-hour",
            Self::LatestDay => "latest-day",
        }
    }

    /// Query value accepted by the HTTP API
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LatestHour => "hour",
            Self::LatestDay => "day",
        }
    }
}

impl fmt::Display for ObservationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" | "latest-hour" => Ok(Self::LatestHour),
            "day" | "latest-day" => Ok(Self::LatestDay),
            _ => Err(DomainError::InvalidPeriod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_latest_hour() {
        assert_eq!(ObservationPeriod::default(), ObservationPeriod::LatestHour);
    }

    #[test]
    fn parses_query_values() {
        assert_eq!(
            "hour".parse::<ObservationPeriod>().unwrap(),
            ObservationPeriod::LatestHour
        );
        assert_eq!(
            "Day".parse::<ObservationPeriod>().unwrap(),
            ObservationPeriod::LatestDay
        );
    }

    #[test]
    fn rejects_unknown_period() {
        assert!(matches!(
            "week".parse::<ObservationPeriod>(),
            Err(DomainError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn path_segments() {
        assert_eq!(ObservationPeriod::LatestHour.as_path_segment(), "latest-hour");
        assert_eq!(ObservationPeriod::LatestDay.as_path_segment(), "latest-day");
    }
}
