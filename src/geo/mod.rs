mod describe;
mod error;
mod locate;
mod nominatim;
mod timezone;
mod types;

pub use describe::PlaceDescriber;
pub use error::GeoError;
pub use locate::LocationResolver;
pub use nominatim::{Geocoder, NominatimClient};
pub use timezone::{TimezoneLookup, TimezoneResolver, TzfLookup};
pub use types::{Address, FallbackReason, Location, Resolution};
