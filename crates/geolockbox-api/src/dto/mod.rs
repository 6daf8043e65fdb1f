mod request;
mod response;

pub use request::{GeofenceRequest, TelemetryRequest};
pub use response::{
    GeofenceResponse, HealthResponse, LockResponse, TelemetryResponse, TrackingFileResponse,
};
