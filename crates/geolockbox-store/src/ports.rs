use async_trait::async_trait;
use geolockbox_core::error::Result;
use geolockbox_core::models::{Delivery, Device, TelemetryRecord};

/// Port for device records
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Retrieve a device by ID
    async fn get_device(&self, id: &str) -> Result<Option<Device>>;

    /// Insert or replace a device
    async fn save_device(&self, device: &Device) -> Result<()>;
}

/// Port for delivery records
#[async_trait]
pub trait DeliveryStore: Send + Sync {
    /// Retrieve a delivery by ID
    async fn get_delivery(&self, id: &str) -> Result<Option<Delivery>>;

    /// Insert or replace a delivery
    async fn save_delivery(&self, delivery: &Delivery) -> Result<()>;

    /// The delivery currently assigned to a device.
    ///
    /// When several deliveries reference the device, the most recently
    /// created one wins.
    async fn find_for_device(&self, device_id: &str) -> Result<Option<Delivery>>;
}

/// Port for append-only telemetry
#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Append a telemetry record
    async fn append_telemetry(&self, record: &TelemetryRecord) -> Result<()>;

    /// All telemetry for a device, ordered by timestamp ascending
    async fn list_for_device(&self, device_id: &str) -> Result<Vec<TelemetryRecord>>;
}
