mod lock;
mod telemetry;
mod tracking;

pub use lock::LockService;
pub use telemetry::TelemetryService;
pub use tracking::TrackingService;
