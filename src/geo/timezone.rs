use chrono_tz::Tz;
use std::sync::Arc;
use tzf_rs::DefaultFinder;

use super::types::{FallbackReason, Resolution};

pub trait TimezoneLookup: Send + Sync {
    /// IANA zone containing the point, `None` when there is none.
    fn zone_at(&self, latitude: f64, longitude: f64) -> Option<String>;
}

/// Offline polygon lookup.
pub struct TzfLookup {
    finder: DefaultFinder,
}

impl TzfLookup {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLookup for TzfLookup {
    fn zone_at(&self, latitude: f64, longitude: f64) -> Option<String> {
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

pub struct TimezoneResolver {
    lookup: Arc<dyn TimezoneLookup>,
    default_zone: String,
}

impl TimezoneResolver {
    pub fn new(lookup: Arc<dyn TimezoneLookup>, default_zone: String) -> Self {
        Self {
            lookup,
            default_zone,
        }
    }

    /// Always yields a zone that chrono-tz can load.
    pub fn resolve(&self, latitude: f64, longitude: f64) -> Resolution<String> {
        match self.lookup.zone_at(latitude, longitude) {
            Some(zone) if zone.parse::<Tz>().is_ok() => Resolution::Resolved(zone),
            Some(zone) => {
                log::warn!("Unknown timezone {:?}, using {}", zone, self.default_zone);
                self.fallback(FallbackReason::Unavailable(format!("unknown zone {}", zone)))
            }
            None => {
                log::debug!(
                    "No timezone at ({}, {}), using {}",
                    latitude,
                    longitude,
                    self.default_zone
                );
                self.fallback(FallbackReason::NoMatch)
            }
        }
    }

    fn fallback(&self, reason: FallbackReason) -> Resolution<String> {
        Resolution::Defaulted {
            value: self.default_zone.clone(),
            reason,
        }
    }
}
