use strum_macros::Display;

/// The 16 points of the compass rose, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Cardinal {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

const ROSE: [Cardinal; 16] = [
    Cardinal::N,
    Cardinal::NNE,
    Cardinal::NE,
    Cardinal::ENE,
    Cardinal::E,
    Cardinal::ESE,
    Cardinal::SE,
    Cardinal::SSE,
    Cardinal::S,
    Cardinal::SSW,
    Cardinal::SW,
    Cardinal::WSW,
    Cardinal::W,
    Cardinal::WNW,
    Cardinal::NW,
    Cardinal::NNW,
];

const SECTOR_DEG: f64 = 22.5;

impl Cardinal {
    /// Nearest compass point to an azimuth in degrees. Exact half-sector
    /// boundaries round up (clockwise), so 11.25° is NNE.
    pub fn from_azimuth(azimuth_deg: f64) -> Self {
        let normalized = azimuth_deg.rem_euclid(360.0);
        let index = (normalized / SECTOR_DEG + 0.5).floor() as usize % ROSE.len();
        ROSE[index]
    }
}
