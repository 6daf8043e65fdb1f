use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Devices
        .route("/api/v1/devices/{device_id}/lock", get(handlers::get_lock))
        .route("/api/v1/devices/{device_id}/telemetry", post(handlers::push_telemetry))

        // Deliveries
        .route("/api/v1/deliveries/{delivery_id}/geofence", post(handlers::update_geofence))
        .route("/api/v1/deliveries/{delivery_id}/tracking", get(handlers::get_tracking))
        .route(
            "/api/v1/deliveries/{delivery_id}/tracking/generate",
            post(handlers::generate_tracking_file),
        )

        .with_state(state)
}
