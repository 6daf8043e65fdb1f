use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::LockResponse;
use crate::error::ApiError;
use crate::services::LockService;
use crate::state::AppState;

/// GET /api/v1/devices/{device_id}/lock - Lock command for a device
pub async fn get_lock(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<String>,
) -> Result<Json<LockResponse>, ApiError> {
    let decision = LockService::evaluate_device(&state, &device_id).await?;
    Ok(Json(decision.into()))
}
