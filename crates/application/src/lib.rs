//! Application layer - Use cases and orchestration
//!
//! Defines the observation port and the station service that merges
//! temperature and wind gust series into station readings.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
