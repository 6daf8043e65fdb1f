use geolockbox_store::ports::{DeliveryStore, DeviceStore, TelemetryStore};
use geolockbox_store::{MemoryStore, Seed};
use std::fs;
use tempfile::TempDir;

const SEED: &str = r#"{
    "devices": [
        {"id": "DEV-0001", "name": "Locker 01", "status": "idle", "latitude": -19.9208, "longitude": -43.9378, "active": false}
    ],
    "deliveries": [
        {"id": "DEL-0001", "order_number": "ORD-1001", "status": "pending", "device_id": "DEV-0001",
         "dest_lat": -19.9320, "dest_lon": -43.9380, "geofence_radius": 150}
    ],
    "telemetry": [
        {"id": "TEL-0001", "device_id": "DEV-0001", "latitude": -19.9208, "longitude": -43.9378, "speed": 0.0,
         "timestamp": "2025-06-01T08:00:00Z"}
    ]
}"#;

#[tokio::test]
async fn test_load_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.json");
    fs::write(&path, SEED).unwrap();

    let store = MemoryStore::from_seed(Seed::from_file(&path).unwrap());

    let device = store.get_device("DEV-0001").await.unwrap().unwrap();
    assert!(!device.active);

    let delivery = store.find_for_device("DEV-0001").await.unwrap().unwrap();
    assert_eq!(delivery.order_number.as_deref(), Some("ORD-1001"));
    assert_eq!(delivery.geofence_radius, Some(150.0));

    assert_eq!(store.list_for_device("DEV-0001").await.unwrap().len(), 1);
}

#[test]
fn test_seed_sections_are_optional() {
    let seed: Seed = serde_json::from_str(r#"{"devices": []}"#).unwrap();
    assert!(seed.deliveries.is_empty());
    assert!(seed.telemetry.is_empty());
}

#[test]
fn test_missing_seed_file_is_an_error() {
    assert!(Seed::from_file("/nonexistent/seed.json").is_err());
}
