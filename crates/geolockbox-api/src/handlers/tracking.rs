use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use geolockbox_core::models::TrackingLog;

use crate::dto::TrackingFileResponse;
use crate::error::ApiError;
use crate::services::TrackingService;
use crate::state::AppState;

/// GET /api/v1/deliveries/{delivery_id}/tracking - Reconstructed trip for a delivery
pub async fn get_tracking(
    State(state): State<Arc<AppState>>,
    Path(delivery_id): Path<String>,
) -> Result<Json<TrackingLog>, ApiError> {
    let log = TrackingService::build_log(&state, &delivery_id).await?;
    Ok(Json(log))
}

/// POST /api/v1/deliveries/{delivery_id}/tracking/generate - Write the tracking log file
pub async fn generate_tracking_file(
    State(state): State<Arc<AppState>>,
    Path(delivery_id): Path<String>,
) -> Result<Json<TrackingFileResponse>, ApiError> {
    let log = TrackingService::build_log(&state, &delivery_id).await?;
    let path = TrackingService::write_artifact(&state, &log).await?;

    Ok(Json(TrackingFileResponse {
        message: "Tracking file generated".to_string(),
        file: path.display().to_string(),
        points: log.tracking.len(),
        distance_km: log.distance_km,
    }))
}
