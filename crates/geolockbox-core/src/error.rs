//! Error types for GeoLockBox

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeolockError {
    // Trip reconstruction errors
    #[error("Insufficient telemetry: {available} usable sample(s), at least {required} required")]
    InsufficientData { required: usize, available: usize },

    // Lookup errors raised by the storage collaborator
    #[error("Device not found: {id}")]
    DeviceNotFound { id: String },

    #[error("Delivery not found: {id}")]
    DeliveryNotFound { id: String },

    #[error("Delivery {id} has no assigned device")]
    DeliveryUnassigned { id: String },

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GeolockError {
    fn from(err: serde_json::Error) -> Self {
        GeolockError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeolockError>;
