use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("tracking API key not configured")]
    MissingApiKey,
    #[error("tracking request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("tracking API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("tracking API error: {0}")]
    Provider(String),
    #[error("no position data in response")]
    NoData,
    #[error("malformed field {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("{0}")]
    Malformed(String),
}
