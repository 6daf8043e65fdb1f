use anyhow::{Context, Result};
use geolockbox_core::models::{Delivery, TelemetryRecord, TrackingLog, TripReport};
use geolockbox_core::{reconstruct_from_records, EngineConfig};
use std::fs;
use std::path::Path;
use tabled::Tabled;

use crate::cli::TripArgs;
use crate::output::OutputWriter;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn execute(args: TripArgs, engine: &EngineConfig, output: &OutputWriter) -> Result<()> {
    let records = load_records(&args.path)?;
    let report = reconstruct_from_records(&records, engine)?;

    let skipped = records.len() - report.point_count;
    if skipped > 0 {
        output.warning(format!("Skipped {} unusable telemetry record(s)", skipped));
    }

    if args.geojson {
        return output.data(&report.to_geojson());
    }

    let log = build_log(&args, &records, &report);

    if let Some(path) = &args.output {
        write_log(path, &log)?;
        if !output.is_json() {
            output.success(format!("Tracking log written to {}", path.display()));
        }
    }

    if output.is_json() {
        return output.result(&log);
    }

    output.info(format!("Trip for delivery {} on device {}", log.delivery_id, log.device_id));
    output.table(summary_rows(&report));
    Ok(())
}

/// Read a JSON array of telemetry records
fn load_records(path: &Path) -> Result<Vec<TelemetryRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read telemetry file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse telemetry file {}", path.display()))
}

fn build_log(args: &TripArgs, records: &[TelemetryRecord], report: &TripReport) -> TrackingLog {
    let device_id = args
        .device_id
        .clone()
        .or_else(|| records.iter().find_map(|r| r.device_id.clone()))
        .unwrap_or_else(|| "unknown".to_string());

    let mut delivery = Delivery::new(args.delivery_id.clone()).with_device(device_id.clone());
    delivery.status = args.status.clone();

    TrackingLog::new(&delivery, device_id, report)
}

fn write_log(path: &Path, log: &TrackingLog) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(log)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write tracking log {}", path.display()))?;

    tracing::info!(path = %path.display(), "Tracking log written");
    Ok(())
}

fn summary_rows(report: &TripReport) -> Vec<SummaryRow> {
    let time_format = "%Y-%m-%d %H:%M:%S UTC";
    vec![
        SummaryRow {
            field: "Start",
            value: format!("{:.6}, {:.6}", report.start.latitude, report.start.longitude),
        },
        SummaryRow {
            field: "End",
            value: format!("{:.6}, {:.6}", report.end.latitude, report.end.longitude),
        },
        SummaryRow {
            field: "Departed",
            value: report.start_time.format(time_format).to_string(),
        },
        SummaryRow {
            field: "Arrived",
            value: report.end_time.format(time_format).to_string(),
        },
        SummaryRow { field: "Distance", value: format!("{} km", report.distance_km) },
        SummaryRow { field: "Average speed", value: format!("{} km/h", report.avg_speed_kmh) },
        SummaryRow { field: "Points", value: report.point_count.to_string() },
    ]
}
