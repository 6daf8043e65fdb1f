use crate::error::{GeolockError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Mean Earth radius used by the haversine formula, in meters
pub const DEFAULT_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Decimal places kept for distances and speeds in emitted reports
pub const DEFAULT_ROUNDING_DECIMALS: u32 = 2;

/// Speed above which a device reporting telemetry is considered moving
pub const DEFAULT_MOVING_SPEED_THRESHOLD: f64 = 0.5;

/// Highest precision accepted for `rounding_decimals`
pub const MAX_ROUNDING_DECIMALS: u32 = 9;

/// Resolved engine settings passed to the evaluator and reconstructor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub earth_radius_m: f64,
    pub rounding_decimals: u32,
    /// Treat a coordinate of exactly 0.0 as "not reported"
    pub zero_coordinate_is_unset: bool,
    pub moving_speed_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: DEFAULT_EARTH_RADIUS_M,
            rounding_decimals: DEFAULT_ROUNDING_DECIMALS,
            zero_coordinate_is_unset: false,
            moving_speed_threshold: DEFAULT_MOVING_SPEED_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Round a value to the configured number of decimals.
    ///
    /// Halves are rounded away from zero, so `0.125` becomes `0.13`.
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.rounding_decimals as i32);
        (value * factor).round() / factor
    }
}

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the geofence engine
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub earth_radius_m: ConfigValue<f64>,
    pub rounding_decimals: ConfigValue<u32>,
    pub zero_coordinate_is_unset: ConfigValue<bool>,
    pub moving_speed_threshold: ConfigValue<f64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        let defaults = EngineConfig::default();
        Self {
            earth_radius_m: ConfigValue::new(defaults.earth_radius_m, ConfigSource::Default),
            rounding_decimals: ConfigValue::new(defaults.rounding_decimals, ConfigSource::Default),
            zero_coordinate_is_unset: ConfigValue::new(
                defaults.zero_coordinate_is_unset,
                ConfigSource::Default,
            ),
            moving_speed_threshold: ConfigValue::new(
                defaults.moving_speed_threshold,
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GeolockError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeolockError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(radius) = file_config.earth_radius_m {
            self.earth_radius_m.update(parse_earth_radius(radius)?, ConfigSource::File);
        }

        if let Some(decimals) = file_config.rounding_decimals {
            self.rounding_decimals
                .update(parse_rounding_decimals(decimals)?, ConfigSource::File);
        }

        if let Some(zero_is_unset) = file_config.zero_coordinate_is_unset {
            self.zero_coordinate_is_unset.update(zero_is_unset, ConfigSource::File);
        }

        if let Some(threshold) = file_config.moving_speed_threshold {
            self.moving_speed_threshold
                .update(parse_moving_speed_threshold(threshold)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    ///
    /// Invalid values are logged and ignored.
    pub fn load_from_env(mut self) -> Self {
        // GEOLOCKBOX_EARTH_RADIUS_M
        if let Ok(raw) = env::var("GEOLOCKBOX_EARTH_RADIUS_M") {
            let parsed = raw.parse::<f64>().ok().and_then(|r| parse_earth_radius(r).ok());
            match parsed {
                Some(radius) => self.earth_radius_m.update(radius, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid GEOLOCKBOX_EARTH_RADIUS_M value '{}': expected a positive number of meters",
                    raw
                ),
            }
        }

        // GEOLOCKBOX_ROUNDING_DECIMALS
        if let Ok(raw) = env::var("GEOLOCKBOX_ROUNDING_DECIMALS") {
            let parsed = raw.parse::<u32>().ok().and_then(|d| parse_rounding_decimals(d).ok());
            match parsed {
                Some(decimals) => self.rounding_decimals.update(decimals, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid GEOLOCKBOX_ROUNDING_DECIMALS value '{}': expected an integer in 0..={}",
                    raw,
                    MAX_ROUNDING_DECIMALS
                ),
            }
        }

        // GEOLOCKBOX_ZERO_IS_UNSET
        if let Ok(raw) = env::var("GEOLOCKBOX_ZERO_IS_UNSET") {
            match parse_bool(&raw) {
                Ok(flag) => self.zero_coordinate_is_unset.update(flag, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOLOCKBOX_ZERO_IS_UNSET value '{}': expected true or false",
                    raw
                ),
            }
        }

        // GEOLOCKBOX_MOVING_SPEED
        if let Ok(raw) = env::var("GEOLOCKBOX_MOVING_SPEED") {
            let parsed = raw.parse::<f64>().ok().and_then(|t| parse_moving_speed_threshold(t).ok());
            match parsed {
                Some(threshold) => {
                    self.moving_speed_threshold.update(threshold, ConfigSource::Environment)
                }
                None => tracing::warn!(
                    "Invalid GEOLOCKBOX_MOVING_SPEED value '{}': expected a number",
                    raw
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<()> {
        if let Some(radius) = overrides.earth_radius_m {
            self.earth_radius_m.update(parse_earth_radius(radius)?, ConfigSource::Cli);
        }

        if let Some(decimals) = overrides.rounding_decimals {
            self.rounding_decimals
                .update(parse_rounding_decimals(decimals)?, ConfigSource::Cli);
        }

        if let Some(zero_is_unset) = overrides.zero_coordinate_is_unset {
            self.zero_coordinate_is_unset.update(zero_is_unset, ConfigSource::Cli);
        }

        Ok(())
    }

    /// Resolve the layered values into the engine settings
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            earth_radius_m: self.earth_radius_m.value,
            rounding_decimals: self.rounding_decimals.value,
            zero_coordinate_is_unset: self.zero_coordinate_is_unset.value,
            moving_speed_threshold: self.moving_speed_threshold.value,
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "earth_radius_m".to_string(),
            (self.earth_radius_m.value.to_string(), self.earth_radius_m.source),
        );
        map.insert(
            "rounding_decimals".to_string(),
            (self.rounding_decimals.value.to_string(), self.rounding_decimals.source),
        );
        map.insert(
            "zero_coordinate_is_unset".to_string(),
            (
                self.zero_coordinate_is_unset.value.to_string(),
                self.zero_coordinate_is_unset.source,
            ),
        );
        map.insert(
            "moving_speed_threshold".to_string(),
            (self.moving_speed_threshold.value.to_string(), self.moving_speed_threshold.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    earth_radius_m: Option<f64>,
    rounding_decimals: Option<u32>,
    zero_coordinate_is_unset: Option<bool>,
    moving_speed_threshold: Option<f64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub earth_radius_m: Option<f64>,
    pub rounding_decimals: Option<u32>,
    pub zero_coordinate_is_unset: Option<bool>,
}

/// Validate an Earth radius in meters
pub fn parse_earth_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(GeolockError::ConfigInvalid {
            key: "earth_radius_m".to_string(),
            reason: format!("Earth radius must be a positive number of meters, got {}", radius),
        })
    }
}

/// Validate a rounding precision
pub fn parse_rounding_decimals(decimals: u32) -> Result<u32> {
    if decimals <= MAX_ROUNDING_DECIMALS {
        Ok(decimals)
    } else {
        Err(GeolockError::ConfigInvalid {
            key: "rounding_decimals".to_string(),
            reason: format!(
                "Rounding precision must be between 0 and {}, got {}",
                MAX_ROUNDING_DECIMALS, decimals
            ),
        })
    }
}

/// Validate the speed above which a device counts as moving
pub fn parse_moving_speed_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_finite() {
        Ok(threshold)
    } else {
        Err(GeolockError::ConfigInvalid {
            key: "moving_speed_threshold".to_string(),
            reason: format!("Moving speed threshold must be a finite number, got {}", threshold),
        })
    }
}

/// Parse a boolean flag from string
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(GeolockError::ConfigInvalid {
            key: "flag".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.earth_radius_m.value, 6_371_000.0);
        assert_eq!(config.earth_radius_m.source, ConfigSource::Default);
        assert_eq!(config.rounding_decimals.value, 2);
        assert!(!config.zero_coordinate_is_unset.value);
        assert_eq!(config.engine(), EngineConfig::default());
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
earth_radius_m = 6378137.0
rounding_decimals = 3
zero_coordinate_is_unset = true
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.earth_radius_m.value, 6_378_137.0);
        assert_eq!(config.earth_radius_m.source, ConfigSource::File);
        assert_eq!(config.rounding_decimals.value, 3);
        assert!(config.zero_coordinate_is_unset.value);
        assert_eq!(config.moving_speed_threshold.source, ConfigSource::Default);
    }

    #[test]
    fn test_file_rejects_non_positive_radius() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "earth_radius_m = 0.0").unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, GeolockError::ConfigInvalid { ref key, .. } if key == "earth_radius_m"));
    }

    #[test]
    fn test_file_rejects_non_finite_speed_threshold() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "moving_speed_threshold = nan").unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(
            matches!(err, GeolockError::ConfigInvalid { ref key, .. } if key == "moving_speed_threshold")
        );
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            earth_radius_m: None,
            rounding_decimals: Some(4),
            zero_coordinate_is_unset: Some(true),
        };

        config.update_from_cli(overrides).unwrap();

        assert_eq!(config.rounding_decimals.value, 4);
        assert_eq!(config.rounding_decimals.source, ConfigSource::Cli);
        assert!(config.zero_coordinate_is_unset.value);
        assert_eq!(config.earth_radius_m.source, ConfigSource::Default);
    }

    #[test]
    fn test_cli_rejects_excessive_precision() {
        let mut config = LayeredConfig::with_defaults();
        let overrides = CliConfigOverrides {
            rounding_decimals: Some(12),
            ..Default::default()
        };
        assert!(config.update_from_cli(overrides).is_err());
        assert_eq!(config.rounding_decimals.value, 2);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let engine = EngineConfig::default();
        assert_eq!(engine.round(0.125), 0.13);
        assert_eq!(engine.round(0.375), 0.38);
        assert_eq!(engine.round(111.194_926_6), 111.19);
        assert_eq!(engine.round(0.0), 0.0);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert_eq!(map.len(), 4);
        let (radius, source) = &map["earth_radius_m"];
        assert_eq!(radius, "6371000");
        assert_eq!(*source, ConfigSource::Default);
    }
}
