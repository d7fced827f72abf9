use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geocoder request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geocoder returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed geocoder response: {0}")]
    Malformed(String),
}
