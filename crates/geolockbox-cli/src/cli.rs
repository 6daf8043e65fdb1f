use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GeoLockBox - geofence lock decisions and delivery trip reconstruction
#[derive(Parser, Debug)]
#[command(name = "geolockbox")]
#[command(about = "Geofence lock decisions and delivery trip reconstruction", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Earth radius in meters used for distance computations
    #[arg(long, global = true, value_name = "METERS")]
    pub earth_radius: Option<f64>,

    /// Decimal places kept in reported distances and speeds
    #[arg(long, global = true, value_name = "N")]
    pub decimals: Option<u32>,

    /// Treat a latitude or longitude of exactly 0.0 as not reported
    #[arg(long, global = true)]
    pub zero_is_unset: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide whether a lock opens at a given position
    Lock(LockArgs),

    /// Reconstruct a trip from a telemetry file
    Trip(TripArgs),

    /// Show the resolved engine configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct LockArgs {
    /// Device latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Device longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Destination latitude
    #[arg(long, allow_hyphen_values = true)]
    pub target_lat: Option<f64>,

    /// Destination longitude
    #[arg(long, allow_hyphen_values = true)]
    pub target_lon: Option<f64>,

    /// Geofence radius in meters
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<f64>,

    /// Administrative override: open regardless of position
    #[arg(long)]
    pub active: bool,
}

#[derive(Parser, Debug)]
pub struct TripArgs {
    /// JSON file holding an array of telemetry records
    pub path: PathBuf,

    /// Delivery id recorded in the tracking log
    #[arg(long, default_value = "local")]
    pub delivery_id: String,

    /// Device id recorded in the tracking log (defaults to the records' device)
    #[arg(long)]
    pub device_id: Option<String>,

    /// Delivery status recorded in the tracking log
    #[arg(long)]
    pub status: Option<String>,

    /// Write the tracking log to this file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the route as a GeoJSON LineString instead of the summary
    #[arg(long)]
    pub geojson: bool,
}
