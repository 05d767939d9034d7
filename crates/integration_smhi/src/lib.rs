//! SMHI observation integration
//!
//! Client for the SMHI open data meteorological observations API
//! (<https://opendata.smhi.se/metobs>). Fetches the latest values of a
//! parameter for one station or for the whole station set. No API key is
//! required upstream.

pub mod client;
mod models;

pub use client::{ObservationClient, SmhiClient, SmhiConfig, SmhiError};
pub use models::{
    SmhiLink, SmhiParameter, SmhiPeriod, SmhiPosition, SmhiResponse, SmhiStation,
    SmhiStationData, SmhiStationSetResponse, SmhiValue,
};
