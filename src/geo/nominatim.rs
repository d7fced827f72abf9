use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::error::GeoError;
use super::types::{Address, Location};
use crate::web::config::GeocodingConfig;

/// Forward and reverse geocoding provider.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for free-text place, `None` when nothing matches.
    async fn search(&self, query: &str) -> Result<Option<Location>, GeoError>;

    /// Address components at a point, `None` when the point has no address.
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<Address>, GeoError>;
}

pub struct NominatimClient {
    client: Client,
    base_url: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl NominatimClient {
    pub fn new(client: Client, config: &GeocodingConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn search(&self, query: &str) -> Result<Option<Location>, GeoError> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeoError::Status(response.status()));
        }

        let hits: Vec<SearchHit> = response.json().await?;
        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let latitude = hit
            .lat
            .trim()
            .parse()
            .map_err(|_| GeoError::Malformed(format!("latitude {:?}", hit.lat)))?;
        let longitude = hit
            .lon
            .trim()
            .parse()
            .map_err(|_| GeoError::Malformed(format!("longitude {:?}", hit.lon)))?;

        Ok(Some(Location {
            latitude,
            longitude,
            display_name: hit.display_name,
        }))
    }

    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<Address>, GeoError> {
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("format", "json".to_string()),
                ("accept-language", self.language.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeoError::Status(response.status()));
        }

        // Points at sea come back as `{"error": "Unable to geocode"}`
        let body: ReverseResponse = response.json().await?;
        if body.error.is_some() {
            return Ok(None);
        }
        Ok(body.address)
    }
}
