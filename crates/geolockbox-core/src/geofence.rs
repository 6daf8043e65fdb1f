//! Geofence evaluation: decide whether a container's lock should open.
//!
//! The lock opens when the device is within the destination geofence
//! (boundary inclusive) OR when the device carries the administrative
//! `active` override. The override is a logical OR with presence, not a
//! replacement for it: an overridden device opens anywhere, including when
//! its position is unknown. Callers must treat that as an explicit safety
//! override. Every other gap in the input fails closed.

use crate::config::EngineConfig;
use crate::geodesy::haversine_distance;
use crate::models::{GeofenceTarget, LockCommand, LockDecision, LockReason, MissingData, Position};

/// Evaluate the lock command for a device.
pub fn evaluate(
    device_position: Option<Position>,
    target: Option<GeofenceTarget>,
    active_override: bool,
    config: &EngineConfig,
) -> LockCommand {
    decide(device_position, target, active_override, config).command
}

/// Evaluate the lock command together with the reason behind it.
pub fn decide(
    device_position: Option<Position>,
    target: Option<GeofenceTarget>,
    active_override: bool,
    config: &EngineConfig,
) -> LockDecision {
    let position = device_position.filter(|p| p.is_usable(config));
    let target = target.filter(|t| t.center.is_usable(config));

    let distance_m = match (&position, &target) {
        (Some(p), Some(t)) => Some(haversine_distance(p, &t.center, config.earth_radius_m)),
        _ => None,
    };

    let missing = if position.is_none() {
        Some(MissingData::Position)
    } else {
        match &target {
            None => Some(MissingData::Target),
            Some(t) if !t.has_usable_radius() => Some(MissingData::Radius),
            Some(_) => None,
        }
    };

    let in_range = match (missing, distance_m, &target) {
        (None, Some(distance), Some(t)) => distance <= t.radius_meters,
        _ => false,
    };

    let reason = if in_range {
        LockReason::GeofenceMatch
    } else if active_override {
        LockReason::AdminOverride
    } else if let Some(missing) = missing {
        LockReason::NoData(missing)
    } else {
        LockReason::OutOfRange
    };

    let decision = LockDecision::new(reason, distance_m);
    tracing::debug!(
        command = %decision.command,
        reason = %decision.reason,
        distance_m = ?decision.distance_m,
        active_override,
        "Evaluated geofence"
    );
    decision
}
