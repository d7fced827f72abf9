use std::sync::Arc;

use super::nominatim::Geocoder;
use super::types::{FallbackReason, Location, Resolution};

/// Turns free-text place descriptions into coordinates, failing open to a
/// fixed default location.
pub struct LocationResolver {
    geocoder: Arc<dyn Geocoder>,
    default: Location,
}

impl LocationResolver {
    pub fn new(geocoder: Arc<dyn Geocoder>, default: Location) -> Self {
        Self { geocoder, default }
    }

    pub async fn resolve(&self, location_text: Option<&str>) -> Resolution<Location> {
        let query = match location_text.map(str::trim) {
            Some(q) if !q.is_empty() => q,
            _ => {
                log::debug!("No location given, using {}", self.default.display_name);
                return self.fallback(FallbackReason::EmptyInput);
            }
        };

        match self.geocoder.search(query).await {
            Ok(Some(location)) => {
                log::debug!(
                    "Geocoded {:?} to {} ({}, {})",
                    query,
                    location.display_name,
                    location.latitude,
                    location.longitude
                );
                Resolution::Resolved(location)
            }
            Ok(None) => {
                log::warn!("No geocoding match for {:?}, using default location", query);
                self.fallback(FallbackReason::NoMatch)
            }
            Err(e) => {
                log::warn!("Geocoding {:?} failed: {}, using default location", query, e);
                self.fallback(FallbackReason::Unavailable(e.to_string()))
            }
        }
    }

    fn fallback(&self, reason: FallbackReason) -> Resolution<Location> {
        Resolution::Defaulted {
            value: self.default.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Address, GeoError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Reply {
        Hit,
        Miss,
        Down,
    }

    struct FakeGeocoder {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl FakeGeocoder {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Geocoder for FakeGeocoder {
        async fn search(&self, query: &str) -> Result<Option<Location>, GeoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Reply::Hit => Ok(Some(Location {
                    latitude: 51.5,
                    longitude: -0.12,
                    display_name: query.to_string(),
                })),
                Reply::Miss => Ok(None),
                Reply::Down => Err(GeoError::Malformed("timed out".into())),
            }
        }

        async fn reverse(&self, _: f64, _: f64) -> Result<Option<Address>, GeoError> {
            unreachable!("forward lookups only")
        }
    }

    fn los_angeles() -> Location {
        Location {
            latitude: 34.052235,
            longitude: -118.243683,
            display_name: "Los Angeles".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_input_uses_default_without_lookup() {
        let geocoder = FakeGeocoder::new(Reply::Hit);
        let resolver = LocationResolver::new(geocoder.clone(), los_angeles());

        for input in [None, Some(""), Some("   ")] {
            let resolution = resolver.resolve(input).await;
            assert_eq!(resolution.value(), &los_angeles());
            assert_eq!(
                resolution,
                Resolution::Defaulted {
                    value: los_angeles(),
                    reason: FallbackReason::EmptyInput
                }
            );
        }
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn match_is_returned() {
        let resolver = LocationResolver::new(FakeGeocoder::new(Reply::Hit), los_angeles());

        let resolution = resolver.resolve(Some("London, UK")).await;
        assert!(resolution.fallback_reason().is_none());
        assert_eq!(resolution.value().display_name, "London, UK");
    }

    #[tokio::test]
    async fn miss_and_outage_fall_back_silently() {
        let miss = LocationResolver::new(FakeGeocoder::new(Reply::Miss), los_angeles());
        let resolution = miss.resolve(Some("Atlantis")).await;
        assert!(matches!(
            resolution,
            Resolution::Defaulted {
                reason: FallbackReason::NoMatch,
                ..
            }
        ));
        assert_eq!(resolution.into_value(), los_angeles());

        let down = LocationResolver::new(FakeGeocoder::new(Reply::Down), los_angeles());
        let resolution = down.resolve(Some("Paris")).await;
        assert!(matches!(
            resolution,
            Resolution::Defaulted {
                reason: FallbackReason::Unavailable(_),
                ..
            }
        ));
        assert_eq!(resolution.value(), &los_angeles());
    }
}
