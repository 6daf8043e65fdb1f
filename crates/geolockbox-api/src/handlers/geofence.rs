use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use geolockbox_core::models::Position;

use crate::dto::{GeofenceRequest, GeofenceResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/deliveries/{delivery_id}/geofence - Set the destination geofence
pub async fn update_geofence(
    State(state): State<Arc<AppState>>,
    Path(delivery_id): Path<String>,
    Json(request): Json<GeofenceRequest>,
) -> Result<Json<GeofenceResponse>, ApiError> {
    let center = match request.center.as_slice() {
        [lat, lon] if lat.is_finite() && lon.is_finite() => Position::new(*lat, *lon),
        _ => {
            return Err(ApiError::bad_request("Invalid geofence center")
                .with_details("center must be [lat, lon] with finite values"))
        }
    };

    if !(request.radius_m.is_finite() && request.radius_m > 0.0) {
        return Err(ApiError::bad_request("Invalid geofence radius")
            .with_details("radius_m must be a positive number of meters"));
    }

    let mut delivery = state
        .delivery_store
        .get_delivery(&delivery_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Delivery not found"))?;

    delivery.set_geofence(center, request.radius_m);
    state.delivery_store.save_delivery(&delivery).await?;

    tracing::info!(
        delivery_id = %delivery.id,
        lat = center.latitude,
        lon = center.longitude,
        radius_m = request.radius_m,
        "Geofence updated"
    );

    Ok(Json(GeofenceResponse { ok: true, delivery }))
}
