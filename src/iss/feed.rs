use std::sync::Arc;

use super::n2yo::{PassQuery, SatelliteTracker};
use super::types::{PassRecord, SatellitePosition};

/// Tracking calls with failures absorbed into `None`.
pub struct SatelliteFeed {
    tracker: Arc<dyn SatelliteTracker>,
    min_visibility_seconds: u32,
}

impl SatelliteFeed {
    pub fn new(tracker: Arc<dyn SatelliteTracker>, min_visibility_seconds: u32) -> Self {
        Self {
            tracker,
            min_visibility_seconds,
        }
    }

    /// `None` when the position is unavailable for any reason.
    pub async fn current_position(&self) -> Option<SatellitePosition> {
        match self.tracker.position().await {
            Ok(position) => Some(position),
            Err(e) => {
                log::warn!("Satellite position unavailable: {}", e);
                None
            }
        }
    }

    /// `None` when the fetch failed; an empty list means no passes are predicted.
    pub async fn fetch_passes(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
        days: u32,
    ) -> Option<Vec<PassRecord>> {
        let query = PassQuery {
            latitude_deg,
            longitude_deg,
            altitude_m,
            days,
            min_visibility_seconds: self.min_visibility_seconds,
        };

        match self.tracker.visual_passes(&query).await {
            Ok(passes) => {
                log::debug!("{} visible passes over {:?}", passes.len(), query);
                Some(passes)
            }
            Err(e) => {
                log::warn!("Visible pass lookup failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iss::{TrackingError, VisiblePass};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        fail: bool,
        queries: Mutex<Vec<PassQuery>>,
    }

    #[async_trait]
    impl SatelliteTracker for Recorder {
        async fn position(&self) -> Result<SatellitePosition, TrackingError> {
            if self.fail {
                Err(TrackingError::NoData)
            } else {
                Ok(SatellitePosition {
                    latitude_deg: 1.0,
                    longitude_deg: 2.0,
                    altitude_km: 410.0,
                })
            }
        }

        async fn visual_passes(&self, query: &PassQuery) -> Result<Vec<PassRecord>, TrackingError> {
            self.queries.lock().unwrap().push(*query);
            if self.fail {
                Err(TrackingError::Provider("Invalid API Key!".into()))
            } else {
                Ok(vec![PassRecord::Valid(VisiblePass {
                    start_utc: 0,
                    end_utc: 60,
                    start_azimuth_deg: 90.0,
                    max_elevation_deg: 12.0,
                    end_azimuth_deg: 270.0,
                    duration_seconds: 60,
                })])
            }
        }
    }

    #[tokio::test]
    async fn failures_become_none() {
        let tracker = Arc::new(Recorder {
            fail: true,
            ..Default::default()
        });
        let feed = SatelliteFeed::new(tracker, 300);

        assert!(feed.current_position().await.is_none());
        assert!(feed.fetch_passes(47.6, -122.3, 0.0, 10).await.is_none());
    }

    #[tokio::test]
    async fn query_uses_visibility_threshold() {
        let tracker = Arc::new(Recorder::default());
        let feed = SatelliteFeed::new(tracker.clone(), 300);

        assert_eq!(feed.current_position().await.map(|p| p.altitude_km), Some(410.0));
        let passes = feed.fetch_passes(47.6, -122.3, 0.0, 10).await.unwrap();
        assert_eq!(passes.len(), 1);

        let queries = tracker.queries.lock().unwrap();
        assert_eq!(
            queries.as_slice(),
            [PassQuery {
                latitude_deg: 47.6,
                longitude_deg: -122.3,
                altitude_m: 0.0,
                days: 10,
                min_visibility_seconds: 300,
            }]
        );
    }
}
