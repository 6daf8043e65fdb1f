mod geofence;
mod health;
mod lock;
mod telemetry;
mod tracking;

pub use geofence::update_geofence;
pub use health::health_check;
pub use lock::get_lock;
pub use telemetry::push_telemetry;
pub use tracking::{generate_tracking_file, get_tracking};
