use std::env;
use std::path::PathBuf;

use geolockbox_core::config::LayeredConfig;
use geolockbox_core::{EngineConfig, Result};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    /// Optional TOML file with engine settings
    pub engine_config_path: Option<PathBuf>,
    /// Optional JSON seed for the in-memory store
    pub seed_file: Option<PathBuf>,
    /// Directory that receives generated tracking logs
    pub tracking_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            cors_origin: "http://localhost:3000".to_string(),
            engine_config_path: None,
            seed_file: None,
            tracking_dir: PathBuf::from("."),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("GEOLOCKBOX_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let cors_origin = env::var("GEOLOCKBOX_CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        let engine_config_path = env::var("GEOLOCKBOX_CONFIG").ok().map(PathBuf::from);
        let seed_file = env::var("GEOLOCKBOX_SEED_FILE").ok().map(PathBuf::from);

        let tracking_dir = env::var("GEOLOCKBOX_TRACKING_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.tracking_dir);

        Self {
            port,
            cors_origin,
            engine_config_path,
            seed_file,
            tracking_dir,
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Resolve engine settings: defaults, then the config file, then environment
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut layered = LayeredConfig::with_defaults();
        if let Some(path) = &self.engine_config_path {
            layered = layered.load_from_file(path)?;
        }
        Ok(layered.load_from_env().engine())
    }
}
