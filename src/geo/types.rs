use serde::{Deserialize, Serialize};
use std::fmt;

/// An observer location on the ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Structured address components from a reverse lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// `city|town|village, state|region, country`, skipping whatever is absent.
    pub fn parts(&self) -> Vec<&str> {
        let settlement = first_present(&[&self.city, &self.town, &self.village]);
        let state = first_present(&[&self.state, &self.region]);
        let country = first_present(&[&self.country]);

        [settlement, state, country].into_iter().flatten().collect()
    }
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    EmptyInput,
    NoMatch,
    Unavailable(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::EmptyInput => write!(f, "no input given"),
            FallbackReason::NoMatch => write!(f, "no match found"),
            FallbackReason::Unavailable(e) => write!(f, "provider unavailable: {}", e),
        }
    }
}

/// Outcome of a lookup that fails open to a configured default.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Resolved(T),
    Defaulted { value: T, reason: FallbackReason },
}

impl<T> Resolution<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolution::Resolved(value) => value,
            Resolution::Defaulted { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Resolution::Resolved(value) => value,
            Resolution::Defaulted { value, .. } => value,
        }
    }

    /// Why the default was used, `None` for a real result.
    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::Defaulted { reason, .. } => Some(reason),
        }
    }
}
