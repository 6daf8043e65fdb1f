use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Telemetry pushed by a device
#[derive(Debug, Deserialize)]
pub struct TelemetryRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub speed: Option<f64>,
    pub battery_level: Option<i32>,
    /// Defaults to the time the request is received
    pub timestamp: Option<DateTime<Utc>>,
}

/// Geofence around a delivery destination
#[derive(Debug, Deserialize)]
pub struct GeofenceRequest {
    /// `[lat, lon]`
    pub center: Vec<f64>,
    pub radius_m: f64,
}
