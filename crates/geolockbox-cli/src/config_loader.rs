//! Engine configuration loading for CLI commands

use anyhow::{Context, Result};
use geolockbox_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "geolockbox.toml";

/// Build the layered configuration: defaults, then file, then environment, then flags
pub fn load_config(
    config_path: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = resolve_config_path(config_path) {
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config
        .update_from_cli(overrides)
        .context("Invalid command-line configuration")?;

    Ok(config)
}

/// Resolve the layered settings for a parsed command line
pub fn load_cli_config(cli: &Cli) -> Result<LayeredConfig> {
    load_config(cli.config.as_deref(), overrides_from(cli))
}

fn overrides_from(cli: &Cli) -> CliConfigOverrides {
    CliConfigOverrides {
        earth_radius_m: cli.earth_radius,
        rounding_decimals: cli.decimals,
        zero_coordinate_is_unset: cli.zero_is_unset.then_some(true),
    }
}

/// An explicit path is always used; the default file only when it exists
fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}
