use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geofence::GeofenceTarget;
use super::position::Position;
use crate::config::EngineConfig;

/// A delivery order as stored by the CRUD layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Delivery {
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub driver_id: Option<String>,
    #[serde(default)]
    pub dest_lat: Option<f64>,
    #[serde(default)]
    pub dest_lon: Option<f64>,
    #[serde(default)]
    pub geofence_radius: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub eta_minutes: Option<i64>,
}

impl Delivery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn with_geofence(mut self, center: Position, radius_m: f64) -> Self {
        self.set_geofence(center, radius_m);
        self
    }

    pub fn set_geofence(&mut self, center: Position, radius_m: f64) {
        self.dest_lat = Some(center.latitude);
        self.dest_lon = Some(center.longitude);
        self.geofence_radius = Some(radius_m);
    }

    /// Destination geofence, if a destination and radius were both recorded.
    ///
    /// The radius is passed through unchecked; the evaluator decides whether
    /// it is usable.
    pub fn geofence_target(&self, config: &EngineConfig) -> Option<GeofenceTarget> {
        let center = Position::from_parts(self.dest_lat, self.dest_lon, config)?;
        let radius = self.geofence_radius?;
        Some(GeofenceTarget::new(center, radius))
    }
}
