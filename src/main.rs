//! Load balancer entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wrr_balancer::config::{self, HealthCheckConfig};
use wrr_balancer::{BackendPool, HttpServer};

/// Weighted round-robin HTTP load balancer.
#[derive(Debug, Parser)]
#[command(name = "wrr-balancer", version)]
struct Cli {
    /// Path to the JSON backend list.
    #[arg(long, default_value = "config/backends.json")]
    config: PathBuf,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wrr_balancer=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Startup-fatal: unreadable config or zero usable backends.
    let entries = config::load_backends(&cli.config)?;
    let pool = Arc::new(BackendPool::from_entries(&entries)?);

    tracing::info!(
        config = %cli.config.display(),
        backends = pool.backends().len(),
        slots = pool.slot_count(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(("0.0.0.0", cli.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(pool, HealthCheckConfig::default());
    server.run(listener).await?;

    Ok(())
}
