//! Lock commands and the reasons behind them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction sent to a container's locking mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockCommand {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "close")]
    Closed,
}

impl LockCommand {
    /// Wire value understood by the device firmware
    pub fn as_str(&self) -> &'static str {
        match self {
            LockCommand::Open => "open",
            LockCommand::Closed => "close",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LockCommand::Open)
    }
}

impl fmt::Display for LockCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that was missing when a decision had to fail closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingData {
    /// The device has not reported a usable position
    Position,
    /// No delivery destination is associated with the device
    Target,
    /// The destination has no positive geofence radius
    Radius,
}

/// Why a lock command was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "missing", rename_all = "snake_case")]
pub enum LockReason {
    /// The device is inside the destination geofence
    GeofenceMatch,
    /// An operator forced the lock open; location was not required
    AdminOverride,
    /// The device is outside the destination geofence
    OutOfRange,
    /// Not enough data to prove the device is in range
    NoData(MissingData),
}

impl LockReason {
    pub fn command(&self) -> LockCommand {
        match self {
            LockReason::GeofenceMatch | LockReason::AdminOverride => LockCommand::Open,
            LockReason::OutOfRange | LockReason::NoData(_) => LockCommand::Closed,
        }
    }
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockReason::GeofenceMatch => write!(f, "inside geofence"),
            LockReason::AdminOverride => write!(f, "administrative override"),
            LockReason::OutOfRange => write!(f, "outside geofence"),
            LockReason::NoData(MissingData::Position) => write!(f, "no device position"),
            LockReason::NoData(MissingData::Target) => write!(f, "no delivery destination"),
            LockReason::NoData(MissingData::Radius) => write!(f, "no geofence radius"),
        }
    }
}

/// Explainable outcome of a geofence evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LockDecision {
    pub command: LockCommand,
    pub reason: LockReason,
    /// Great-circle distance to the destination, when it could be computed
    pub distance_m: Option<f64>,
}

impl LockDecision {
    pub fn new(reason: LockReason, distance_m: Option<f64>) -> Self {
        Self { command: reason.command(), reason, distance_m }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_command_wire_values() {
        assert_eq!(serde_json::to_string(&LockCommand::Open).unwrap(), "\"open\"");
        assert_eq!(serde_json::to_string(&LockCommand::Closed).unwrap(), "\"close\"");
        assert_eq!(LockCommand::Closed.to_string(), "close");
    }

    #[test]
    fn test_reason_determines_command() {
        assert_eq!(LockDecision::new(LockReason::GeofenceMatch, Some(3.0)).command, LockCommand::Open);
        assert_eq!(LockDecision::new(LockReason::AdminOverride, None).command, LockCommand::Open);
        assert_eq!(LockDecision::new(LockReason::OutOfRange, Some(900.0)).command, LockCommand::Closed);
        assert_eq!(
            LockDecision::new(LockReason::NoData(MissingData::Radius), None).command,
            LockCommand::Closed
        );
    }

    #[test]
    fn test_reason_serialization() {
        let json = serde_json::to_value(LockReason::NoData(MissingData::Position)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "no_data", "missing": "position"}));

        let json = serde_json::to_value(LockReason::GeofenceMatch).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "geofence_match"}));
    }
}
