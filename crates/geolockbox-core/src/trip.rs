//! Trip reconstruction from a device's recorded telemetry.

use crate::config::EngineConfig;
use crate::error::{GeolockError, Result};
use crate::geodesy::path_length;
use crate::models::{Position, TelemetryRecord, TelemetrySample, TripReport};

/// Fewest samples that describe a trip
pub const MIN_TRIP_SAMPLES: usize = 2;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Reconstruct a trip summary from telemetry samples.
///
/// Samples are stably sorted by timestamp before processing, so callers need
/// not guarantee ordering. Samples whose position is not usable under
/// `config` are dropped. Distance and average speed are rounded with
/// [`EngineConfig::round`]; a trip whose first and last timestamps coincide
/// reports an average speed of zero.
///
/// # Errors
///
/// Returns [`GeolockError::InsufficientData`] when fewer than
/// [`MIN_TRIP_SAMPLES`] usable samples remain.
pub fn reconstruct(samples: &[TelemetrySample], config: &EngineConfig) -> Result<TripReport> {
    let mut ordered: Vec<TelemetrySample> =
        samples.iter().filter(|s| s.position.is_usable(config)).copied().collect();

    let dropped = samples.len() - ordered.len();
    if dropped > 0 {
        tracing::warn!(dropped, "Ignoring telemetry samples without a usable position");
    }

    if ordered.len() < MIN_TRIP_SAMPLES {
        return Err(GeolockError::InsufficientData {
            required: MIN_TRIP_SAMPLES,
            available: ordered.len(),
        });
    }

    ordered.sort_by_key(|s| s.timestamp);

    let polyline: Vec<Position> = ordered.iter().map(|s| s.position).collect();
    let (first, last) = (ordered[0], ordered[ordered.len() - 1]);

    let distance_km = path_length(&polyline, config.earth_radius_m) / 1000.0;
    let elapsed = last.timestamp - first.timestamp;
    let duration_hours = elapsed.num_milliseconds() as f64 / MILLIS_PER_HOUR;
    let avg_speed_kmh = if duration_hours > 0.0 { distance_km / duration_hours } else { 0.0 };

    tracing::debug!(
        points = polyline.len(),
        distance_km,
        duration_hours,
        avg_speed_kmh,
        "Reconstructed trip"
    );

    Ok(TripReport {
        start: first.position,
        end: last.position,
        start_time: first.timestamp,
        end_time: last.timestamp,
        distance_km: config.round(distance_km),
        avg_speed_kmh: config.round(avg_speed_kmh),
        point_count: polyline.len(),
        polyline,
    })
}

/// Reconstruct a trip from raw telemetry rows.
///
/// Rows missing a position or timestamp are skipped before reconstruction.
pub fn reconstruct_from_records(
    records: &[TelemetryRecord],
    config: &EngineConfig,
) -> Result<TripReport> {
    let samples: Vec<TelemetrySample> =
        records.iter().filter_map(|r| r.to_sample(config)).collect();

    let skipped = records.len() - samples.len();
    if skipped > 0 {
        tracing::warn!(skipped, total = records.len(), "Skipping incomplete telemetry records");
    }

    reconstruct(&samples, config)
}
