//! Application services

pub mod reading_composer;
mod station_service;

pub use station_service::StationService;
