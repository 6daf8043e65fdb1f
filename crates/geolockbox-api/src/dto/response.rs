use geolockbox_core::models::{
    Delivery, Device, LockCommand, LockDecision, LockReason, TelemetryRecord,
};
use serde::Serialize;

/// Lock command returned to the device firmware
#[derive(Debug, Serialize)]
pub struct LockResponse {
    pub lock: LockCommand,
    pub reason: LockReason,
    #[serde(rename = "distanceM", skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

impl From<LockDecision> for LockResponse {
    fn from(decision: LockDecision) -> Self {
        Self {
            lock: decision.command,
            reason: decision.reason,
            distance_m: decision.distance_m,
        }
    }
}

/// Telemetry ingestion response
#[derive(Debug, Serialize)]
pub struct TelemetryResponse {
    pub ok: bool,
    pub telemetry: TelemetryRecord,
    pub device: Device,
}

/// Geofence update response
#[derive(Debug, Serialize)]
pub struct GeofenceResponse {
    pub ok: bool,
    pub delivery: Delivery,
}

/// Summary returned after writing a tracking log file
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingFileResponse {
    pub message: String,
    pub file: String,
    pub points: usize,
    pub distance_km: f64,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "geolockbox-api" }
    }
}
