//! Domain entities

mod station_reading;

pub use station_reading::StationReading;
