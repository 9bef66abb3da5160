//! Demo echo backend.
//!
//! A trivial HTTP server that answers every request with a line naming
//! its own port. Used to exercise the balancer by hand; not part of the
//! core.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "echo_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(9001);

    let app = axum::Router::new()
        .fallback(move || async move { format!("Hello from backend on port {port}!\n") });

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "Echo backend starting");
    axum::serve(listener, app).await?;

    Ok(())
}
