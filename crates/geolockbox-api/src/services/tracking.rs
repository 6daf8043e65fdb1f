use geolockbox_core::models::TrackingLog;
use geolockbox_core::{reconstruct_from_records, GeolockError, Result};
use std::path::PathBuf;

use crate::state::AppState;

/// Service for reconstructing delivery trips
pub struct TrackingService;

impl TrackingService {
    /// Build the tracking log for a delivery from its device's telemetry
    pub async fn build_log(state: &AppState, delivery_id: &str) -> Result<TrackingLog> {
        let delivery = state
            .delivery_store
            .get_delivery(delivery_id)
            .await?
            .ok_or_else(|| GeolockError::DeliveryNotFound { id: delivery_id.to_string() })?;

        let device_id = delivery
            .device_id
            .clone()
            .ok_or_else(|| GeolockError::DeliveryUnassigned { id: delivery.id.clone() })?;

        let device = state
            .device_store
            .get_device(&device_id)
            .await?
            .ok_or_else(|| GeolockError::DeviceNotFound { id: device_id.clone() })?;

        let records = state.telemetry_store.list_for_device(&device.id).await?;
        let report = reconstruct_from_records(&records, &state.engine)?;

        tracing::info!(
            delivery_id = %delivery.id,
            device_id = %device.id,
            points = report.point_count,
            distance_km = report.distance_km,
            "Trip reconstructed"
        );

        Ok(TrackingLog::new(&delivery, device.id, &report))
    }

    /// Write a tracking log into the configured tracking directory
    pub async fn write_artifact(state: &AppState, log: &TrackingLog) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&state.tracking_dir).await?;

        let path = state.tracking_dir.join(log.file_name());
        let content = serde_json::to_string_pretty(log)?;
        tokio::fs::write(&path, content).await?;

        tracing::info!(path = %path.display(), "Tracking log written");
        Ok(path)
    }
}
