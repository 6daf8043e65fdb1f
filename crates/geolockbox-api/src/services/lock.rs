use geolockbox_core::models::LockDecision;
use geolockbox_core::{decide, GeolockError, Result};

use crate::state::AppState;

/// Service for evaluating a device's lock state
pub struct LockService;

impl LockService {
    /// Evaluate the lock for a device against its assigned delivery.
    ///
    /// A device without a delivery is evaluated with no geofence and
    /// therefore stays closed unless its `active` override is set.
    pub async fn evaluate_device(state: &AppState, device_id: &str) -> Result<LockDecision> {
        let device = state
            .device_store
            .get_device(device_id)
            .await?
            .ok_or_else(|| GeolockError::DeviceNotFound { id: device_id.to_string() })?;

        let delivery = state.delivery_store.find_for_device(device_id).await?;
        let target = delivery.as_ref().and_then(|d| d.geofence_target(&state.engine));

        let decision = decide(device.position(&state.engine), target, device.active, &state.engine);

        tracing::info!(
            device_id = %device.id,
            delivery_id = ?delivery.as_ref().map(|d| d.id.as_str()),
            lock = %decision.command,
            reason = %decision.reason,
            "Lock evaluated"
        );

        Ok(decision)
    }
}
