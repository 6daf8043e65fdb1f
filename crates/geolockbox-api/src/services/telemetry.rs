use chrono::Utc;
use geolockbox_core::models::{generate_id, Device, Position, TelemetryRecord};
use geolockbox_core::{GeolockError, Result};

use crate::dto::TelemetryRequest;
use crate::state::AppState;

/// Service for recording device telemetry
pub struct TelemetryService;

impl TelemetryService {
    /// Append a telemetry record and move the device to the reported fix
    pub async fn ingest(
        state: &AppState,
        device_id: &str,
        request: &TelemetryRequest,
    ) -> Result<(TelemetryRecord, Device)> {
        let mut device = state
            .device_store
            .get_device(device_id)
            .await?
            .ok_or_else(|| GeolockError::DeviceNotFound { id: device_id.to_string() })?;

        let timestamp = request.timestamp.unwrap_or_else(Utc::now);
        let record = TelemetryRecord {
            id: generate_id("TEL"),
            device_id: Some(device.id.clone()),
            latitude: Some(request.latitude),
            longitude: Some(request.longitude),
            speed: request.speed,
            battery_level: request.battery_level,
            timestamp: Some(timestamp),
        };

        state.telemetry_store.append_telemetry(&record).await?;

        let position = Position::new(request.latitude, request.longitude);
        device.record_fix(position, request.speed, timestamp, &state.engine);
        state.device_store.save_device(&device).await?;

        tracing::info!(
            device_id = %device.id,
            telemetry_id = %record.id,
            status = ?device.status,
            "Telemetry recorded"
        );

        Ok((record, device))
    }
}
