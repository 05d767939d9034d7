//! Infrastructure layer - Adapters for external systems
//!
//! Implements the observation port on top of the SMHI client and provides
//! configuration loading and logging setup for the server binary.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, SecurityConfig, ServerConfig};
pub use telemetry::{TelemetryError, init_tracing};
