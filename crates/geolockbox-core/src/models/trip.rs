//! Trip summaries produced from recorded telemetry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::delivery::Delivery;
use super::position::Position;

/// Summary of a device's recorded trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    pub start: Position,
    pub end: Position,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub point_count: usize,
    /// Visited positions in chronological order
    pub polyline: Vec<Position>,
}

impl TripReport {
    /// Polyline as `[lon, lat]` pairs
    pub fn tracking_points(&self) -> Vec<[f64; 2]> {
        self.polyline.iter().map(Position::lon_lat).collect()
    }

    /// Polyline as a GeoJSON LineString geometry for map consumers
    pub fn to_geojson(&self) -> geojson::Geometry {
        let coordinates = self.polyline.iter().map(|p| p.lon_lat().to_vec()).collect();
        geojson::Geometry::new(geojson::Value::LineString(coordinates))
    }
}

/// Tracking log document handed to downstream consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingLog {
    pub delivery_id: String,
    pub device_id: String,
    pub status: Option<String>,
    pub validated: bool,
    pub start: Position,
    pub end: Position,
    pub start_timestamp: DateTime<Utc>,
    pub end_timestamp: DateTime<Utc>,
    pub distance_km: f64,
    #[serde(rename = "speedAvgKmH")]
    pub speed_avg_kmh: f64,
    /// `[lon, lat]` pairs in chronological order
    pub tracking: Vec<[f64; 2]>,
}

impl TrackingLog {
    pub fn new(delivery: &Delivery, device_id: impl Into<String>, report: &TripReport) -> Self {
        Self {
            delivery_id: delivery.id.clone(),
            device_id: device_id.into(),
            status: delivery.status.clone(),
            validated: true,
            start: report.start,
            end: report.end,
            start_timestamp: report.start_time,
            end_timestamp: report.end_time,
            distance_km: report.distance_km,
            speed_avg_kmh: report.avg_speed_kmh,
            tracking: report.tracking_points(),
        }
    }

    /// File name used when the log is written out as an artifact
    pub fn file_name(&self) -> String {
        format!("device_tracking_log_{}.json", self.delivery_id)
    }
}
