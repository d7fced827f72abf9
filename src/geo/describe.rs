use std::sync::Arc;

use super::nominatim::Geocoder;

pub const ABOVE_WATER: &str = "Currently above water";

/// Describes what lies beneath a point, e.g. the satellite's ground track.
pub struct PlaceDescriber {
    geocoder: Arc<dyn Geocoder>,
}

impl PlaceDescriber {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    pub async fn describe(&self, latitude: f64, longitude: f64) -> String {
        match self.geocoder.reverse(latitude, longitude).await {
            Ok(Some(address)) => {
                let parts = address.parts();
                if parts.is_empty() {
                    ABOVE_WATER.to_string()
                } else {
                    format!("Currently above: {}", parts.join(", "))
                }
            }
            Ok(None) => ABOVE_WATER.to_string(),
            Err(e) => {
                log::warn!("Reverse lookup at ({}, {}) failed: {}", latitude, longitude, e);
                format!("Location lookup failed: {}", e)
            }
        }
    }
}
