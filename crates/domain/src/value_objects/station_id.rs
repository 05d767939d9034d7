//! Station identifier value object
//!
//! SMHI identifies observation stations by a positive integer
//! (for example `159880` for Arvidsjaur A).
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::StationId;
//!
//! let id = StationId::parse("159880").expect("valid station id");
//! assert_eq!(id.value(), 159_880);
//! assert_eq!(id.to_string(), "159880");
//!
//! assert!(StationId::parse("abc").is_err());
//! assert!(StationId::parse("0").is_err());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated SMHI station number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StationId(u32);

impl StationId {
    /// Create a station id from a number
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStationId` for zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidStationId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parse a station id from its decimal string form
    ///
    /// Surrounding whitespace is ignored. Signs, decimals and anything
    /// non-numeric are rejected.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidStationId(s.to_string()));
        }
        let value = trimmed
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidStationId(s.to_string()))?;
        Self::new(value)
    }

    /// Get the numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StationId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u32> for StationId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StationId> for u32 {
    fn from(id: StationId) -> Self {
        id.0
    }
}
