use anyhow::Result;
use console::style;
use geolockbox_core::models::{GeofenceTarget, LockDecision, Position};
use geolockbox_core::{decide, EngineConfig};

use crate::cli::LockArgs;
use crate::output::OutputWriter;

pub fn execute(args: LockArgs, engine: &EngineConfig, output: &OutputWriter) -> Result<()> {
    let decision = evaluate_args(&args, engine);

    if output.is_json() {
        return output.result(decision);
    }

    let command = if decision.command.is_open() {
        style(decision.command.as_str()).green().bold()
    } else {
        style(decision.command.as_str()).red().bold()
    };
    output.kv("Lock", command);
    output.kv("Reason", decision.reason);
    if let Some(distance) = decision.distance_m {
        output.kv("Distance", format!("{:.1} m", distance));
    }

    Ok(())
}

fn evaluate_args(args: &LockArgs, engine: &EngineConfig) -> LockDecision {
    let position = Position::from_parts(args.lat, args.lon, engine);

    // The radius is handed over as given so that the evaluator reports it
    let target = Position::from_parts(args.target_lat, args.target_lon, engine)
        .map(|center| GeofenceTarget::new(center, args.radius.unwrap_or(f64::NAN)));

    decide(position, target, args.active, engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geolockbox_core::models::{LockCommand, LockReason, MissingData};

    fn args(lat: f64, lon: f64, radius: Option<f64>) -> LockArgs {
        LockArgs {
            lat: Some(lat),
            lon: Some(lon),
            target_lat: Some(-19.9320),
            target_lon: Some(-43.9380),
            radius,
            active: false,
        }
    }

    #[test]
    fn test_inside_geofence_opens() {
        let decision = evaluate_args(&args(-19.9321, -43.9381, Some(150.0)), &EngineConfig::default());
        assert_eq!(decision.command, LockCommand::Open);
        assert_eq!(decision.reason, LockReason::GeofenceMatch);
    }

    #[test]
    fn test_outside_geofence_closes() {
        let decision = evaluate_args(&args(-19.9700, -43.9900, Some(150.0)), &EngineConfig::default());
        assert_eq!(decision.command, LockCommand::Closed);
        assert_eq!(decision.reason, LockReason::OutOfRange);
    }

    #[test]
    fn test_missing_radius_closes() {
        let decision = evaluate_args(&args(-19.9321, -43.9381, None), &EngineConfig::default());
        assert_eq!(decision.reason, LockReason::NoData(MissingData::Radius));
    }

    #[test]
    fn test_active_override_without_position() {
        let args = LockArgs {
            lat: None,
            lon: None,
            target_lat: None,
            target_lon: None,
            radius: None,
            active: true,
        };
        let decision = evaluate_args(&args, &EngineConfig::default());
        assert_eq!(decision.command, LockCommand::Open);
        assert_eq!(decision.reason, LockReason::AdminOverride);
    }
}
