//! GeoLockBox Core - Domain models, geofence evaluation, and trip reconstruction
//!
//! This crate contains the pure domain logic of the GeoLockBox system. Every
//! operation here is a synchronous function over data supplied by the storage
//! layer; nothing is retained between calls.

pub mod config;
pub mod error;
pub mod geodesy;
pub mod geofence;
pub mod models;
pub mod trip;

pub use config::EngineConfig;
pub use error::{GeolockError, Result};
pub use geofence::{decide, evaluate};
pub use trip::{reconstruct, reconstruct_from_records};
