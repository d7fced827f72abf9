use std::sync::Arc;

use crate::geo::{
    Geocoder, LocationResolver, NominatimClient, PlaceDescriber, TimezoneLookup,
    TimezoneResolver, TzfLookup,
};
use crate::iss::{IssGuide, N2yoClient, SatelliteFeed, SatelliteTracker};

use super::config::{Config, HttpConfig};

/// The external services the guide talks to.
pub struct Providers {
    pub geocoder: Arc<dyn Geocoder>,
    pub timezones: Arc<dyn TimezoneLookup>,
    pub tracker: Arc<dyn SatelliteTracker>,
}

impl Providers {
    pub fn live(config: &Config) -> reqwest::Result<Self> {
        let client = http_client(&config.http)?;
        Ok(Self {
            geocoder: Arc::new(NominatimClient::new(client.clone(), &config.geocoding)),
            timezones: Arc::new(TzfLookup::new()),
            tracker: Arc::new(N2yoClient::new(
                client,
                &config.tracking,
                config.api_key.clone(),
            )),
        })
    }
}

/// Every outbound call shares this client and its timeout.
fn http_client(config: &HttpConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub guide: Arc<IssGuide>,
}

impl AppState {
    pub fn new(config: Config, providers: Providers) -> Self {
        let guide = IssGuide::new(
            LocationResolver::new(
                providers.geocoder.clone(),
                config.defaults.location.clone(),
            ),
            TimezoneResolver::new(providers.timezones, config.defaults.timezone.clone()),
            SatelliteFeed::new(providers.tracker, config.tracking.min_visibility_seconds),
            PlaceDescriber::new(providers.geocoder),
            config.tracking.lookahead_days,
        );

        Self {
            config: Arc::new(config),
            guide: Arc::new(guide),
        }
    }
}
