mod config;
mod setup;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use setup::{build_app, create_store};
use taskd_core::TaskStore;
use telemetry::{init_telemetry, log_startup_info};
use tokio::signal;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "taskd")]
#[command(about = "Task CRUD HTTP service")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CONFIG_FILE")]
    config: Option<String>,

    /// Database URL override
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Listen address override
    #[arg(long, env = "LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// Log level override
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(config_file) => Config::from_file(config_file)?,
        None => Config::from_env()?,
    };

    // Apply CLI overrides
    if let Some(ref database_url) = cli.database_url {
        config.database.url = Some(database_url.clone());
    }

    if let Some(ref listen_addr) = cli.listen_addr {
        config.server.listen_addr = listen_addr.clone();
    }

    if let Some(ref log_level) = cli.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(&cli).context("Failed to load configuration")?;

    // Initialize telemetry/logging system
    init_telemetry(&config.logging).context("Failed to initialize telemetry")?;

    // Validate configuration (will exit if invalid)
    if let Err(e) = config.validate() {
        error!(error = %e, "Configuration validation failed");
        std::process::exit(1);
    }

    // Log startup information
    log_startup_info(&config);

    // Connect to the database and ensure the schema exists; both are fatal
    // on failure
    let store = create_store(&config)
        .await
        .context("Failed to initialize task store")?;

    // Build the HTTP application
    let app = build_app(store.clone(), &config);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server started on {}", addr);

    // Serve until a shutdown signal arrives, then drain in-flight requests
    // for at most the configured grace period.
    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel();
    let mut serve_task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = drain_tx.send(());
            })
            .await
    });

    match drain_rx.await {
        Ok(()) => {
            info!("Shutdown signal received, draining in-flight requests");
            match tokio::time::timeout(config.shutdown_grace(), &mut serve_task).await {
                Ok(joined) => joined
                    .context("Server task panicked")?
                    .context("Server error")?,
                Err(_) => {
                    warn!("Drain deadline elapsed, closing remaining connections");
                    serve_task.abort();
                }
            }
        }
        Err(_) => {
            // The server stopped without a signal; surface its error
            serve_task
                .await
                .context("Server task panicked")?
                .context("Server error")?;
        }
    }

    // The store is closed only after the server has stopped
    store.close().await;
    info!("Server exiting");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
