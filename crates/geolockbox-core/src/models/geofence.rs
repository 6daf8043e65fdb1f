use serde::{Deserialize, Serialize};

use super::position::Position;

/// Circular geofence around a delivery destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceTarget {
    pub center: Position,
    pub radius_meters: f64,
}

impl GeofenceTarget {
    pub fn new(center: Position, radius_meters: f64) -> Self {
        Self { center, radius_meters }
    }

    /// A geofence is only configured when its radius is strictly positive
    pub fn has_usable_radius(&self) -> bool {
        self.radius_meters.is_finite() && self.radius_meters > 0.0
    }
}
