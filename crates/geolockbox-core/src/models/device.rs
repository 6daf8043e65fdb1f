use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::config::EngineConfig;

/// Operational status reported for a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    #[default]
    Idle,
    InTransit,
    Locked,
    Unlocked,
}

/// A tracked delivery container as stored by the CRUD layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: DeviceStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub battery_level: Option<f64>,
    pub last_update: Option<DateTime<Utc>>,
    /// Administrative force-open flag; only an explicit `true` opens the lock
    #[serde(default)]
    pub active: bool,
    pub assigned_user_id: Option<String>,
}

impl Device {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: DeviceStatus::Idle,
            latitude: None,
            longitude: None,
            battery_level: None,
            last_update: None,
            active: false,
            assigned_user_id: None,
        }
    }

    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Last known position, if one was reported and is usable
    pub fn position(&self, config: &EngineConfig) -> Option<Position> {
        Position::from_parts(self.latitude, self.longitude, config)
    }

    /// Record a new fix and derive the movement status from `speed`
    pub fn record_fix(
        &mut self,
        position: Position,
        speed: Option<f64>,
        at: DateTime<Utc>,
        config: &EngineConfig,
    ) {
        self.latitude = Some(position.latitude);
        self.longitude = Some(position.longitude);
        self.last_update = Some(at);
        if let Some(speed) = speed {
            self.status = if speed > config.moving_speed_threshold {
                DeviceStatus::InTransit
            } else {
                DeviceStatus::Idle
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_requires_both_coordinates() {
        let config = EngineConfig::default();
        let mut device = Device::new("DEV-1", "Locker 01");
        assert!(device.position(&config).is_none());

        device.latitude = Some(-19.9208);
        assert!(device.position(&config).is_none());

        device.longitude = Some(-43.9378);
        assert_eq!(device.position(&config), Some(Position::new(-19.9208, -43.9378)));
    }

    #[test]
    fn test_record_fix_updates_status_from_speed() {
        let config = EngineConfig::default();
        let now = Utc::now();
        let mut device = Device::new("DEV-1", "Locker 01");

        device.record_fix(Position::new(1.0, 2.0), Some(12.0), now, &config);
        assert_eq!(device.status, DeviceStatus::InTransit);
        assert_eq!(device.last_update, Some(now));

        device.record_fix(Position::new(1.0, 2.0), Some(0.5), now, &config);
        assert_eq!(device.status, DeviceStatus::Idle);

        device.status = DeviceStatus::Locked;
        device.record_fix(Position::new(1.5, 2.5), None, now, &config);
        assert_eq!(device.status, DeviceStatus::Locked);
        assert_eq!(device.latitude, Some(1.5));
    }

    #[test]
    fn test_deserialize_defaults() {
        let device: Device = serde_json::from_str(r#"{"id": "DEV-1", "name": "Locker"}"#).unwrap();
        assert!(!device.active);
        assert_eq!(device.status, DeviceStatus::Idle);
        assert!(device.latitude.is_none());
    }

    #[test]
    fn test_new_device_has_no_override() {
        assert!(!Device::new("DEV-1", "Locker 01").active);
    }
}
