use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dto::{TelemetryRequest, TelemetryResponse};
use crate::error::ApiError;
use crate::services::TelemetryService;
use crate::state::AppState;

/// POST /api/v1/devices/{device_id}/telemetry - Record a position report
pub async fn push_telemetry(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<String>,
    Json(request): Json<TelemetryRequest>,
) -> Result<(StatusCode, Json<TelemetryResponse>), ApiError> {
    if !request.latitude.is_finite() || !request.longitude.is_finite() {
        return Err(ApiError::bad_request("Invalid coordinates")
            .with_details("latitude and longitude must be finite numbers"));
    }

    let (telemetry, device) = TelemetryService::ingest(&state, &device_id, &request).await?;

    Ok((
        StatusCode::CREATED,
        Json(TelemetryResponse { ok: true, telemetry, device }),
    ))
}
