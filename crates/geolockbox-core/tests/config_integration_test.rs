//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use geolockbox_core::config::{CliConfigOverrides, ConfigSource, EngineConfig, LayeredConfig};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn clear_env() {
    env::remove_var("GEOLOCKBOX_EARTH_RADIUS_M");
    env::remove_var("GEOLOCKBOX_ROUNDING_DECIMALS");
    env::remove_var("GEOLOCKBOX_ZERO_IS_UNSET");
    env::remove_var("GEOLOCKBOX_MOVING_SPEED");
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", contents).unwrap();
    file
}

#[test]
#[serial]
fn test_defaults_without_file_or_env() {
    clear_env();
    let config = LayeredConfig::with_defaults().load_from_env();
    assert_eq!(config.engine(), EngineConfig::default());
    assert_eq!(config.rounding_decimals.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = config_file("rounding_decimals = 3\nzero_coordinate_is_unset = false");

    env::set_var("GEOLOCKBOX_ROUNDING_DECIMALS", "1");
    env::set_var("GEOLOCKBOX_ZERO_IS_UNSET", "true");

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.rounding_decimals.value, 1);
    assert_eq!(config.rounding_decimals.source, ConfigSource::Environment);
    assert!(config.zero_coordinate_is_unset.value);
    assert_eq!(config.zero_coordinate_is_unset.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    env::set_var("GEOLOCKBOX_EARTH_RADIUS_M", "-5");
    env::set_var("GEOLOCKBOX_ROUNDING_DECIMALS", "many");
    env::set_var("GEOLOCKBOX_MOVING_SPEED", "fast");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.earth_radius_m.source, ConfigSource::Default);
    assert_eq!(config.rounding_decimals.source, ConfigSource::Default);
    assert_eq!(config.moving_speed_threshold.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var("GEOLOCKBOX_EARTH_RADIUS_M", "6378137");

    let mut config = LayeredConfig::with_defaults().load_from_env();
    assert_eq!(config.earth_radius_m.value, 6_378_137.0);

    config
        .update_from_cli(CliConfigOverrides {
            earth_radius_m: Some(6_371_008.8),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(config.earth_radius_m.value, 6_371_008.8);
    assert_eq!(config.earth_radius_m.source, ConfigSource::Cli);

    clear_env();
}

#[test]
fn test_missing_file_is_an_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/geolockbox.toml");
    assert!(result.is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = config_file("earth_radius_m = \"wide\"");
    assert!(LayeredConfig::with_defaults().load_from_file(file.path()).is_err());
}
