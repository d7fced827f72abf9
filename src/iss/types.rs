use serde::{Deserialize, Serialize};

/// Sub-satellite point and altitude (km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SatellitePosition {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
}

/// A predicted visible pass, in the provider's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisiblePass {
    #[serde(rename = "startUTC")]
    pub start_utc: i64,
    #[serde(rename = "endUTC")]
    pub end_utc: i64,
    #[serde(rename = "startAz")]
    pub start_azimuth_deg: f64,
    #[serde(rename = "maxEl")]
    pub max_elevation_deg: f64,
    #[serde(rename = "endAz")]
    pub end_azimuth_deg: f64,
    #[serde(rename = "duration")]
    pub duration_seconds: i64,
}

/// One entry of the provider's pass list. A bad entry does not spoil the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum PassRecord {
    Valid(VisiblePass),
    Malformed(String),
}

impl PassRecord {
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(pass) => PassRecord::Valid(pass),
            Err(e) => PassRecord::Malformed(e.to_string()),
        }
    }
}
