mod cardinal;
mod error;
mod feed;
mod format;
mod guide;
mod n2yo;
mod types;

pub use cardinal::Cardinal;
pub use error::{FormatError, TrackingError};
pub use feed::SatelliteFeed;
pub use format::{format_pass, format_record};
pub use guide::{GuideReport, GuideRequest, IssGuide, IssPositionView};
pub use n2yo::{N2yoClient, PassQuery, SatelliteTracker};
pub use types::{PassRecord, SatellitePosition, VisiblePass};
