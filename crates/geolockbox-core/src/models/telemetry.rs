use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::config::EngineConfig;

/// A raw telemetry row as stored by the CRUD layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TelemetryRecord {
    pub id: String,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub battery_level: Option<i32>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TelemetryRecord {
    /// Convert to a sample usable for trip reconstruction.
    ///
    /// Rows without a usable position or a timestamp yield `None`.
    pub fn to_sample(&self, config: &EngineConfig) -> Option<TelemetrySample> {
        let position = Position::from_parts(self.latitude, self.longitude, config)?;
        let timestamp = self.timestamp?;
        Some(TelemetrySample { position, timestamp, speed: self.speed })
    }
}

/// A timestamped position reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub position: Position,
    pub timestamp: DateTime<Utc>,
    pub speed: Option<f64>,
}

impl TelemetrySample {
    pub fn new(position: Position, timestamp: DateTime<Utc>) -> Self {
        Self { position, timestamp, speed: None }
    }
}
