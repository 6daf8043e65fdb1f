//! In-memory storage implementation for development and testing.

use async_trait::async_trait;
use geolockbox_core::error::{GeolockError, Result};
use geolockbox_core::models::{Delivery, Device, TelemetryRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::ports::{DeliveryStore, DeviceStore, TelemetryStore};

fn poisoned<T>(_: PoisonError<T>) -> GeolockError {
    GeolockError::Storage("in-memory store lock poisoned".to_string())
}

/// Initial contents for a [`MemoryStore`], in the layout of a mock JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
    #[serde(default)]
    pub telemetry: Vec<TelemetryRecord>,
}

impl Seed {
    /// Read a seed from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// In-memory implementation of all storage ports
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    devices: Arc<RwLock<HashMap<String, Device>>>,
    deliveries: Arc<RwLock<HashMap<String, Delivery>>>,
    telemetry: Arc<RwLock<Vec<TelemetryRecord>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from a seed
    pub fn from_seed(seed: Seed) -> Self {
        let devices: HashMap<String, Device> =
            seed.devices.into_iter().map(|d| (d.id.clone(), d)).collect();
        let deliveries: HashMap<String, Delivery> =
            seed.deliveries.into_iter().map(|d| (d.id.clone(), d)).collect();
        tracing::debug!(
            devices = devices.len(),
            deliveries = deliveries.len(),
            telemetry = seed.telemetry.len(),
            "Seeded in-memory store"
        );
        Self {
            devices: Arc::new(RwLock::new(devices)),
            deliveries: Arc::new(RwLock::new(deliveries)),
            telemetry: Arc::new(RwLock::new(seed.telemetry)),
        }
    }
}

#[async_trait]
impl DeviceStore for MemoryStore {
    async fn get_device(&self, id: &str) -> Result<Option<Device>> {
        let devices = self.devices.read().map_err(poisoned)?;
        Ok(devices.get(id).cloned())
    }

    async fn save_device(&self, device: &Device) -> Result<()> {
        let mut devices = self.devices.write().map_err(poisoned)?;
        devices.insert(device.id.clone(), device.clone());
        Ok(())
    }
}

#[async_trait]
impl DeliveryStore for MemoryStore {
    async fn get_delivery(&self, id: &str) -> Result<Option<Delivery>> {
        let deliveries = self.deliveries.read().map_err(poisoned)?;
        Ok(deliveries.get(id).cloned())
    }

    async fn save_delivery(&self, delivery: &Delivery) -> Result<()> {
        let mut deliveries = self.deliveries.write().map_err(poisoned)?;
        deliveries.insert(delivery.id.clone(), delivery.clone());
        Ok(())
    }

    async fn find_for_device(&self, device_id: &str) -> Result<Option<Delivery>> {
        let deliveries = self.deliveries.read().map_err(poisoned)?;
        Ok(deliveries
            .values()
            .filter(|d| d.device_id.as_deref() == Some(device_id))
            .max_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)))
            .cloned())
    }
}

#[async_trait]
impl TelemetryStore for MemoryStore {
    async fn append_telemetry(&self, record: &TelemetryRecord) -> Result<()> {
        let mut telemetry = self.telemetry.write().map_err(poisoned)?;
        telemetry.push(record.clone());
        Ok(())
    }

    async fn list_for_device(&self, device_id: &str) -> Result<Vec<TelemetryRecord>> {
        let telemetry = self.telemetry.read().map_err(poisoned)?;
        let mut records: Vec<TelemetryRecord> = telemetry
            .iter()
            .filter(|t| t.device_id.as_deref() == Some(device_id))
            .cloned()
            .collect();
        records.sort_by_key(|t| t.timestamp);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[tokio::test]
    async fn test_device_round_trip() {
        let store = MemoryStore::new();
        let device = Device::new("DEV-1", "Locker 01").with_position(-19.9, -43.9);

        store.save_device(&device).await.unwrap();

        assert_eq!(store.get_device("DEV-1").await.unwrap(), Some(device));
        assert_eq!(store.get_device("DEV-2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_for_device_prefers_latest_delivery() {
        let store = MemoryStore::new();
        let earlier = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        let mut old = Delivery::new("DEL-OLD").with_device("DEV-1");
        old.created_at = Some(earlier);
        let mut new = Delivery::new("DEL-NEW").with_device("DEV-1");
        new.created_at = Some(earlier + Duration::days(1));
        let other = Delivery::new("DEL-OTHER").with_device("DEV-2");

        for d in [&old, &new, &other] {
            store.save_delivery(d).await.unwrap();
        }

        let found = store.find_for_device("DEV-1").await.unwrap().unwrap();
        assert_eq!(found.id, "DEL-NEW");
        assert!(store.find_for_device("DEV-9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_telemetry_is_filtered_and_ordered() {
        let store = MemoryStore::new();
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();

        for (id, device, minutes) in [("TEL-2", "DEV-1", 10), ("TEL-1", "DEV-1", 0), ("TEL-3", "DEV-2", 5)] {
            let record = TelemetryRecord {
                id: id.to_string(),
                device_id: Some(device.to_string()),
                timestamp: Some(t0 + Duration::minutes(minutes)),
                ..Default::default()
            };
            store.append_telemetry(&record).await.unwrap();
        }

        let records = store.list_for_device("DEV-1").await.unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["TEL-1", "TEL-2"]);
        assert_eq!(store.list_for_device("DEV-2").await.unwrap().len(), 1);
    }
}
