//! Observation parameter value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// SMHI metobs parameter measured at a station
///
/// See <https://opendata.smhi.se/metobs/resources/parameter> for the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationParameter {
    /// Air temperature, instantaneous value once per hour (parameter 1)
    Temperature,
    /// Wind gust, max value once per hour (parameter 21)
    WindGust,
}

impl ObservationParameter {
    /// Numeric parameter code used in SMHI URLs
    pub const fn code(&self) -> u16 {
        match self {
            Self::Temperature => 1,
            Self::WindGust => 21,
        }
    }

    /// Short human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::WindGust => "wind gust",
        }
    }
}

impl fmt::Display for ObservationParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_codes() {
        assert_eq!(ObservationParameter::Temperature.code(), 1);
        assert_eq!(ObservationParameter::WindGust.code(), 21);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(ObservationParameter::WindGust.to_string(), "wind gust");
    }
}
