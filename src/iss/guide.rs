use serde::{Deserialize, Serialize};
use std::fmt;

use super::feed::SatelliteFeed;
use super::format::format_record;
use crate::geo::{LocationResolver, PlaceDescriber, TimezoneResolver};

pub const DEFAULT_COUNTRY: &str = "USA";

/// Where the user wants to watch from, as typed into the form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuideRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

impl GuideRequest {
    /// `city[, state][, country]`, or `None` without a city.
    pub fn location_text(&self) -> Option<String> {
        let city = self.city.trim();
        if city.is_empty() {
            return None;
        }

        let mut text = city.to_string();
        let state = self.state.trim();
        if !state.is_empty() {
            text.push_str(", ");
            text.push_str(state);
        }
        let country = match self.country.trim() {
            "" => DEFAULT_COUNTRY,
            country => country,
        };
        text.push_str(", ");
        text.push_str(country);
        Some(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssPositionView {
    pub latitude: String,
    pub longitude: String,
    pub altitude: String,
    pub location_info: String,
}

/// Everything the guide page shows for one submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GuideReport {
    pub current_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub iss_position: Option<IssPositionView>,
    pub passes: Option<Vec<String>>,
    pub error: Option<String>,
}

impl GuideReport {
    pub fn failed(detail: impl fmt::Display) -> Self {
        GuideReport {
            error: Some(format!("An error occurred: {}", detail)),
            ..Default::default()
        }
    }
}

pub struct IssGuide {
    locator: LocationResolver,
    timezones: TimezoneResolver,
    feed: SatelliteFeed,
    describer: PlaceDescriber,
    lookahead_days: u32,
}

impl IssGuide {
    pub fn new(
        locator: LocationResolver,
        timezones: TimezoneResolver,
        feed: SatelliteFeed,
        describer: PlaceDescriber,
        lookahead_days: u32,
    ) -> Self {
        Self {
            locator,
            timezones,
            feed,
            describer,
            lookahead_days,
        }
    }

    pub async fn run(&self, request: &GuideRequest) -> GuideReport {
        let location_text = request.location_text();

        // Geocoding and the satellite position do not depend on each other
        let (location, position) = tokio::join!(
            self.locator.resolve(location_text.as_deref()),
            self.feed.current_position()
        );
        if let Some(reason) = location.fallback_reason() {
            log::info!(
                "Using default location {}: {}",
                location.value().display_name,
                reason
            );
        }
        let location = location.into_value();

        let timezone = self.timezones.resolve(location.latitude, location.longitude);
        if let Some(reason) = timezone.fallback_reason() {
            log::info!("Using default timezone {}: {}", timezone.value(), reason);
        }
        let timezone = timezone.into_value();

        let iss_position = match position {
            Some(p) => Some(IssPositionView {
                latitude: format!("{:.4}", p.latitude_deg),
                longitude: format!("{:.4}", p.longitude_deg),
                altitude: format!("{:.2}", p.altitude_km),
                location_info: self
                    .describer
                    .describe(p.latitude_deg, p.longitude_deg)
                    .await,
            }),
            None => None,
        };

        let passes = self
            .feed
            .fetch_passes(
                location.latitude,
                location.longitude,
                0.0,
                self.lookahead_days,
            )
            .await
            .filter(|records| !records.is_empty())
            .map(|records| {
                records
                    .iter()
                    .map(|record| format_record(record, &timezone))
                    .collect()
            });

        GuideReport {
            current_location: Some(location.display_name),
            latitude: Some(location.latitude),
            longitude: Some(location.longitude),
            timezone: Some(timezone),
            iss_position,
            passes,
            error: None,
        }
    }
}

impl fmt::Display for GuideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return writeln!(f, "{}", error);
        }
        if let Some(location) = &self.current_location {
            writeln!(f, "Location: {}", location)?;
        }
        if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
            writeln!(f, "Coordinates: {}, {}", lat, lon)?;
        }
        if let Some(timezone) = &self.timezone {
            writeln!(f, "Timezone: {}", timezone)?;
        }

        writeln!(f)?;
        match &self.iss_position {
            Some(p) => {
                writeln!(f, "ISS position:")?;
                writeln!(f, "  Latitude: {}", p.latitude)?;
                writeln!(f, "  Longitude: {}", p.longitude)?;
                writeln!(f, "  Altitude: {} km", p.altitude)?;
                writeln!(f, "  {}", p.location_info)?;
            }
            None => writeln!(f, "ISS position unavailable")?,
        }

        writeln!(f)?;
        match &self.passes {
            Some(passes) => {
                for (i, pass) in passes.iter().enumerate() {
                    writeln!(f, "Pass {}:", i + 1)?;
                    writeln!(f, "{}", pass)?;
                    writeln!(f)?;
                }
            }
            None => writeln!(f, "No visible passes found")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(city: &str, state: &str, country: &str) -> GuideRequest {
        GuideRequest {
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }

    #[test]
    fn location_text_joins_present_fields() {
        assert_eq!(
            request("Seattle", "WA", "USA").location_text().as_deref(),
            Some("Seattle, WA, USA")
        );
        assert_eq!(
            request(" Lyon ", "", "France").location_text().as_deref(),
            Some("Lyon, France")
        );
    }

    #[test]
    fn blank_country_defaults_to_usa() {
        assert_eq!(
            request("Austin", "TX", "  ").location_text().as_deref(),
            Some("Austin, TX, USA")
        );
    }

    #[test]
    fn no_city_means_no_location() {
        assert_eq!(request("", "WA", "USA").location_text(), None);
        assert_eq!(GuideRequest::default().location_text(), None);
    }

    #[test]
    fn failed_report_carries_message() {
        let report = GuideReport::failed("stage panicked");
        assert_eq!(report.error.as_deref(), Some("An error occurred: stage panicked"));
        assert!(report.current_location.is_none());
        assert!(report.to_string().starts_with("An error occurred"));
    }
}
