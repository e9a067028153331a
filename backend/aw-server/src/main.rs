use aw_server::{AppState, ServerError, build_router, logger};

use aw_config::{Config, CreditMode};

use std::error::Error;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use rand::Rng;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Project values may come from .env files; a missing file is fine
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        // Ensure log directory exists
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting aw-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and schema
    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let pool = aw_db::connect(&database_path, config.database.max_connections).await?;
    aw_db::migrate(&pool).await?;

    let jwt_secret = match config.auth.jwt_secret {
        Some(ref secret) => {
            info!("JWT: HS256 session tokens enabled");
            secret.as_bytes().to_vec()
        }
        None => {
            warn!("auth.jwt_secret not set, using an ephemeral secret; sessions end on restart");
            let mut secret = [0u8; 32];
            rand::rng().fill(&mut secret);
            secret.to_vec()
        }
    };

    match config.rewards.credit_mode {
        CreditMode::Open => warn!(
            "Credit mode OPEN: /api/addPoints accepts unauthenticated credits for any uid"
        ),
        CreditMode::Verified => info!("Credit mode verified: credits require a session and watch ticket"),
    }

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    // Build application state
    let app_state = AppState::new(pool, &config, &jwt_secret).with_prometheus(prometheus);

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
