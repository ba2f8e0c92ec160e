//! Pomodoro Timer - A work/break countdown with a local control API
//! 
//! This is the main entry point for the pomodoro-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomodoro_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{countdown_task, state_logger_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the background tasks that drive and trace the timer
    let countdown = tokio::spawn(countdown_task(state.timer.clone()));
    let logger = tokio::spawn(state_logger_task(state.timer.clone()));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;
    
    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle    - Start or stop the countdown");
    info!("  POST /reset     - Reset to a paused 25:00 work phase");
    info!("  POST /increment - Add one minute while paused");
    info!("  POST /decrement - Remove one minute while paused");
    info!("  GET  /status    - Current timer state");
    info!("  GET  /events    - Server-sent timer snapshots");
    info!("  GET  /health    - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);
    
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    countdown.abort();
    logger.abort();

    info!("Server shutdown complete");
    Ok(())
}
