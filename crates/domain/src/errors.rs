//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Station identifier is not a positive integer
    #[error("Invalid station id: {0}")]
    InvalidStationId(String),

    /// Observation period is not one of the supported values
    #[error("Invalid period: {0}. Use 'hour' or 'day'")]
    InvalidPeriod(String),

    /// Observed value could not be read as a decimal number
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// Observation timestamp is outside the representable range
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
