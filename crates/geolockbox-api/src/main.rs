use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use geolockbox_store::{MemoryStore, Seed};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geolockbox_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geolockbox_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    let engine = config.engine_config().context("Failed to load engine configuration")?;

    tracing::info!(
        port = config.port,
        earth_radius_m = engine.earth_radius_m,
        rounding_decimals = engine.rounding_decimals,
        zero_coordinate_is_unset = engine.zero_coordinate_is_unset,
        "Starting GeoLockBox API server"
    );

    let store = match &config.seed_file {
        Some(path) => {
            let seed = Seed::from_file(path)
                .with_context(|| format!("Failed to load seed file {}", path.display()))?;
            tracing::info!(
                devices = seed.devices.len(),
                deliveries = seed.deliveries.len(),
                telemetry = seed.telemetry.len(),
                "Loaded seed data"
            );
            MemoryStore::from_seed(seed)
        }
        None => {
            tracing::info!("Using empty in-memory storage (set GEOLOCKBOX_SEED_FILE to seed it)");
            MemoryStore::new()
        }
    };

    let state = Arc::new(AppState::in_memory(store, engine, config.tracking_dir.clone()));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
