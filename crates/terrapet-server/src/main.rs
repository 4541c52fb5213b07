//! TerraPet server entry point.
//!
//! Loads configuration, wires the climate source and progress ledger into
//! the shared state, and serves HTTP until shutdown.

use std::path::PathBuf;
use std::sync::Arc;

use terrapet_core::config::{LogFormat, LoggingConfig};
use terrapet_core::{PetStateEngine, TerrapetConfig};
use terrapet_db::{PostgresConfig, PostgresPool, ProgressLedger};
use terrapet_server::{AppState, ServerConfig, start_server};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Config file used when `TERRAPET_CONFIG` is not set.
const DEFAULT_CONFIG_PATH: &str = "terrapet-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, database setup, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("TERRAPET_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = TerrapetConfig::load(&config_path)?;

    init_tracing(&config.logging);
    info!(config = %config_path.display(), "terrapet-server starting");

    let source = config.climate.build_source()?;
    info!(
        source = source.name(),
        co2_url = config.climate.co2_url,
        temperature_url = config.climate.temperature_url,
        request_timeout_ms = config.climate.request_timeout_ms,
        cache_ttl_secs = config.climate.cache_ttl_secs,
        "climate source configured"
    );

    let ledger = match &config.database.url {
        Some(url) => {
            let pg_config =
                PostgresConfig::new(url).with_max_connections(config.database.max_connections);
            let pool = PostgresPool::connect(&pg_config).await?;
            pool.run_migrations().await?;
            ProgressLedger::Postgres(pool)
        }
        None => {
            warn!("no database configured, progress is kept in memory");
            ProgressLedger::in_memory()
        }
    };
    info!(ledger = ledger.name(), "progress ledger ready");

    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    let state = Arc::new(AppState::new(
        PetStateEngine::new(source),
        ledger,
        config.server.static_dir,
    ));

    start_server(&server_config, Arc::clone(&state)).await?;

    if let ProgressLedger::Postgres(pool) = &state.ledger {
        pool.close().await;
    }

    Ok(())
}

/// Initialize structured logging. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
