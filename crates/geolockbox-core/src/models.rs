pub mod delivery;
pub mod device;
pub mod geofence;
pub mod ids;
pub mod lock;
pub mod position;
pub mod telemetry;
pub mod trip;

pub use delivery::Delivery;
pub use device::{Device, DeviceStatus};
pub use geofence::GeofenceTarget;
pub use ids::generate_id;
pub use lock::{LockCommand, LockDecision, LockReason, MissingData};
pub use position::Position;
pub use telemetry::{TelemetryRecord, TelemetrySample};
pub use trip::{TrackingLog, TripReport};
