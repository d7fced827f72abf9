use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;

use crate::geo::Location;

pub const API_KEY_ENV: &str = "N2YO_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unknown default timezone: {0}")]
    UnknownTimezone(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web: WebConfig,
    pub http: HttpConfig,
    pub tracking: TrackingConfig,
    pub geocoding: GeocodingConfig,
    pub defaults: DefaultsConfig,
    /// Filled from the environment, never from the file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: "iss_tracker".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub base_url: String,
    pub satellite_id: u32,
    pub lookahead_days: u32,
    pub min_visibility_seconds: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.n2yo.com/rest/v1/satellite".to_string(),
            satellite_id: 25544,
            lookahead_days: 10,
            min_visibility_seconds: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub language: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub location: Location,
    pub timezone: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: Location {
                latitude: 34.052235,
                longitude: -118.243683,
                display_name: "Los Angeles".to_string(),
            },
            timezone: "America/Los_Angeles".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// The fallback zone has to be loadable, since pass times are rendered in it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.timezone.parse::<Tz>().is_err() {
            return Err(ConfigError::UnknownTimezone(self.defaults.timezone.clone()));
        }
        Ok(())
    }

    /// Loads the file if one is given, otherwise the built-in defaults, then
    /// picks up the tracking API key from the environment.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Ok(config)
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_dashboard() {
        let config = Config::default();
        assert_eq!(config.web.bind, "0.0.0.0:5000");
        assert_eq!(config.tracking.satellite_id, 25544);
        assert_eq!(config.tracking.lookahead_days, 10);
        assert_eq!(config.tracking.min_visibility_seconds, 300);
        assert_eq!(config.defaults.location.display_name, "Los Angeles");
        assert_eq!(config.defaults.timezone, "America/Los_Angeles");
        assert_eq!(config.http.timeout, Duration::from_secs(10));
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let yaml = r#"
web:
  bind: "127.0.0.1:8080"
http:
  timeout: 2s 500ms
tracking:
  lookahead_days: 3
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:8080");
        assert_eq!(config.http.timeout, Duration::from_millis(2500));
        assert_eq!(config.http.user_agent, "iss_tracker");
        assert_eq!(config.tracking.lookahead_days, 3);
        assert_eq!(config.tracking.satellite_id, 25544);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn example_file_parses() {
        let config = Config::from_file("config.example.yaml").unwrap();
        assert_eq!(config.defaults.location.latitude, 34.052235);
        assert_eq!(config.geocoding.language, "en");
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let yaml = "http:\n  timeout: soon\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn unknown_default_timezone_is_rejected() {
        let yaml = "defaults:\n  timezone: Mars/Olympus_Mons\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownTimezone(ref zone)) if zone == "Mars/Olympus_Mons"
        ));

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn from_file_rejects_unknown_default_timezone() {
        let path =
            std::env::temp_dir().join(format!("skywatch-bad-tz-{}.yaml", std::process::id()));
        std::fs::write(&path, "defaults:\n  timezone: Not/A_Zone\n").unwrap();

        let result = Config::from_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::UnknownTimezone(_))));
    }
}
