//! GeoLockBox Store - Storage ports and adapters
//!
//! The geofence engine treats persistence as an external collaborator. This
//! crate defines the ports that collaborator must implement and ships an
//! in-memory adapter for development and tests.

pub mod memory;
pub mod ports;

pub use memory::{MemoryStore, Seed};
pub use ports::{DeliveryStore, DeviceStore, TelemetryStore};
