//! End-to-end tests for trip reconstruction over stored telemetry records

use chrono::{Duration, TimeZone, Utc};
use geolockbox_core::models::{Delivery, Position, TelemetryRecord, TrackingLog};
use geolockbox_core::{reconstruct_from_records, EngineConfig, GeolockError};

fn delivery_with_geofence() -> Delivery {
    let mut delivery = Delivery::new("DEL-0001")
        .with_device("DEV-0001")
        .with_geofence(Position::new(-19.9320, -43.9380), 150.0);
    delivery.status = Some("in_transit".to_string());
    delivery
}

#[test]
fn test_tracking_log_from_stored_json() {
    let config = EngineConfig::default();
    let records: Vec<TelemetryRecord> = serde_json::from_str(
        r#"[
            {"id": "TEL-3", "device_id": "DEV-0001", "latitude": 0.0, "longitude": 1.0, "speed": 30.0, "timestamp": "2025-06-01T09:00:00Z"},
            {"id": "TEL-1", "device_id": "DEV-0001", "latitude": 0.0, "longitude": 0.0, "speed": 0.0, "timestamp": "2025-06-01T08:00:00Z"},
            {"id": "TEL-2", "device_id": "DEV-0001", "latitude": null, "longitude": null, "timestamp": "2025-06-01T08:30:00Z"}
        ]"#,
    )
    .unwrap();

    let report = reconstruct_from_records(&records, &config).unwrap();
    let log = TrackingLog::new(&delivery_with_geofence(), "DEV-0001", &report);

    let start = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    assert_eq!(log.start_timestamp, start);
    assert_eq!(log.end_timestamp, start + Duration::hours(1));
    assert_eq!(log.distance_km, 111.19);
    assert_eq!(log.speed_avg_kmh, 111.19);
    assert_eq!(log.tracking, vec![[0.0, 0.0], [1.0, 0.0]]);
    assert!(log.validated);
}

#[test]
fn test_insufficient_records() {
    let config = EngineConfig::default();
    let records = vec![TelemetryRecord {
        id: "TEL-1".to_string(),
        latitude: Some(-19.9),
        longitude: Some(-43.9),
        timestamp: Some(Utc::now()),
        ..Default::default()
    }];

    let err = reconstruct_from_records(&records, &config).unwrap_err();
    assert!(matches!(err, GeolockError::InsufficientData { .. }));
    assert_eq!(
        err.to_string(),
        "Insufficient telemetry: 1 usable sample(s), at least 2 required"
    );
}
