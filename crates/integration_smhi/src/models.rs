//! SMHI metobs data models
//!
//! Wire types for the `data.json` documents. Every field is optional because
//! SMHI omits or nulls parts of the schema for stations without recent data.

use serde::{Deserialize, Serialize};

/// Response for a single station query
///
/// `GET /parameter/{p}/station/{id}/period/{period}/data.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmhiResponse {
    /// Last update of the data set (epoch millis)
    pub updated: Option<i64>,
    /// Parameter description
    pub parameter: Option<SmhiParameter>,
    /// Station metadata
    pub station: Option<SmhiStation>,
    /// Period description
    pub period: Option<SmhiPeriod>,
    /// Station positions over time
    pub position: Option<Vec<SmhiPosition>>,
    /// Related resources
    pub link: Option<Vec<SmhiLink>>,
    /// Observed values, most recent first for `latest-hour`
    pub value: Option<Vec<SmhiValue>>,
}

/// Response for a station-set query
///
/// `GET /parameter/{p}/station-set/all/period/latest-hour/data.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmhiStationSetResponse {
    pub updated: Option<i64>,
    pub parameter: Option<SmhiParameter>,
    pub period: Option<SmhiPeriod>,
    pub link: Option<Vec<SmhiLink>>,
    /// One entry per station in the set
    pub station: Option<Vec<SmhiStationData>>,
}

/// Station entry inside a station-set response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmhiStationData {
    /// Station number as a string, e.g. `"159880"`
    pub key: Option<String>,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub owner_category: Option<String>,
    pub measuring_stations: Option<String>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub height: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub value: Option<Vec<SmhiValue>>,
}

/// Single observation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmhiValue {
    /// Observation time (epoch millis, UTC)
    pub date: i64,
    /// Observed value as a decimal string, e.g. `"15.2"`
    pub value: Option<String>,
    /// Quality code (`G` controlled, `Y` suspect)
    pub quality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmhiParameter {
    pub key: Option<String>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmhiStation {
    pub key: Option<String>,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub owner_category: Option<String>,
    pub measuring_stations: Option<String>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmhiPeriod {
    pub key: Option<String>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub summary: Option<String>,
    pub sampling: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmhiPosition {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub height: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmhiLink {
    pub href: Option<String>,
    pub rel: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}
