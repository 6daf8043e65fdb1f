//! Geographic positions in WGS 84 degrees.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// A WGS 84 coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lng", alias = "longitude")]
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a position from optionally-reported coordinates.
    ///
    /// Returns `None` unless both coordinates are present and usable under
    /// `config` (see [`Position::is_usable`]).
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
        config: &EngineConfig,
    ) -> Option<Self> {
        let position = Self::new(latitude?, longitude?);
        position.is_usable(config).then_some(position)
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Whether this position can take part in a distance computation.
    ///
    /// Non-finite coordinates are never usable. With
    /// `zero_coordinate_is_unset` enabled, a coordinate of exactly `0.0` is
    /// read as "not reported", matching legacy firmware that sends zeros
    /// before acquiring a fix.
    pub fn is_usable(&self, config: &EngineConfig) -> bool {
        if !self.is_finite() {
            return false;
        }
        !(config.zero_coordinate_is_unset && (self.latitude == 0.0 || self.longitude == 0.0))
    }

    /// Longitude-first pair, as used by map polylines and GeoJSON
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl From<Position> for geo::Point<f64> {
    fn from(position: Position) -> Self {
        geo::Point::new(position.longitude, position.latitude)
    }
}

impl From<geo::Point<f64>> for Position {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}
