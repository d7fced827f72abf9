use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use super::error::TrackingError;
use super::types::{PassRecord, SatellitePosition};
use crate::web::config::TrackingConfig;

/// Observer and window for a visible-pass prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassQuery {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    pub days: u32,
    pub min_visibility_seconds: u32,
}

/// Remote satellite-tracking service.
#[async_trait]
pub trait SatelliteTracker: Send + Sync {
    async fn position(&self) -> Result<SatellitePosition, TrackingError>;

    async fn visual_passes(&self, query: &PassQuery) -> Result<Vec<PassRecord>, TrackingError>;
}

pub struct N2yoClient {
    client: Client,
    base_url: String,
    satellite_id: u32,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PositionsResponse {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    positions: Option<Vec<PositionRecord>>,
}

#[derive(Debug, Deserialize)]
struct PositionRecord {
    #[serde(default)]
    satlatitude: Value,
    #[serde(default)]
    satlongitude: Value,
    #[serde(default)]
    sataltitude: Value,
}

#[derive(Debug, Deserialize)]
struct PassesResponse {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    passes: Option<Vec<Value>>,
}

impl N2yoClient {
    pub fn new(client: Client, config: &TrackingConfig, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            satellite_id: config.satellite_id,
            api_key,
        }
    }

    async fn get(&self, path: String) -> Result<Response, TrackingError> {
        let key = self.api_key.as_deref().ok_or(TrackingError::MissingApiKey)?;
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .query(&[("apiKey", key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TrackingError::Status(response.status()));
        }
        Ok(response)
    }
}

#[async_trait]
impl SatelliteTracker for N2yoClient {
    async fn position(&self) -> Result<SatellitePosition, TrackingError> {
        // One position sample at observer (0, 0, 0)
        let path = format!("positions/{}/0/0/0/1/", self.satellite_id);
        let body: PositionsResponse = self.get(path).await?.json().await?;

        if let Some(error) = body.error {
            return Err(TrackingError::Provider(provider_message(&error)));
        }

        let record = body
            .positions
            .and_then(|p| p.into_iter().next())
            .ok_or(TrackingError::NoData)?;

        Ok(SatellitePosition {
            latitude_deg: number(&record.satlatitude)
                .ok_or(TrackingError::Malformed("satlatitude"))?,
            longitude_deg: number(&record.satlongitude)
                .ok_or(TrackingError::Malformed("satlongitude"))?,
            altitude_km: number(&record.sataltitude)
                .ok_or(TrackingError::Malformed("sataltitude"))?,
        })
    }

    async fn visual_passes(&self, query: &PassQuery) -> Result<Vec<PassRecord>, TrackingError> {
        let path = format!(
            "visualpasses/{}/{}/{}/{}/{}/{}/",
            self.satellite_id,
            query.latitude_deg,
            query.longitude_deg,
            query.altitude_m,
            query.days,
            query.min_visibility_seconds
        );
        let body: PassesResponse = self.get(path).await?.json().await?;

        if let Some(error) = body.error {
            return Err(TrackingError::Provider(provider_message(&error)));
        }

        // The provider leaves out `passes` entirely when none are predicted
        Ok(body
            .passes
            .unwrap_or_default()
            .into_iter()
            .map(PassRecord::from_value)
            .collect())
    }
}

/// Accepts JSON numbers and numeric strings.
fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn provider_message(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
