use geolockbox_core::EngineConfig;
use geolockbox_store::ports::{DeliveryStore, DeviceStore, TelemetryStore};
use geolockbox_store::MemoryStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub device_store: Arc<dyn DeviceStore>,
    pub delivery_store: Arc<dyn DeliveryStore>,
    pub telemetry_store: Arc<dyn TelemetryStore>,
    pub engine: EngineConfig,
    pub tracking_dir: PathBuf,
}

impl AppState {
    pub fn new(
        device_store: Arc<dyn DeviceStore>,
        delivery_store: Arc<dyn DeliveryStore>,
        telemetry_store: Arc<dyn TelemetryStore>,
        engine: EngineConfig,
        tracking_dir: PathBuf,
    ) -> Self {
        Self {
            device_store,
            delivery_store,
            telemetry_store,
            engine,
            tracking_dir,
        }
    }

    /// State backed by a single in-memory store
    pub fn in_memory(store: MemoryStore, engine: EngineConfig, tracking_dir: PathBuf) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store, engine, tracking_dir)
    }
}
