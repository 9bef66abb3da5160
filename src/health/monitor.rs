//! Active health checking.
//!
//! # Responsibilities
//! - Periodically probe every distinct backend
//! - Update each backend's liveness flag from the probe outcome

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::time;

use crate::balancer::{Backend, BackendPool};
use crate::config::schema::HealthCheckConfig;

pub struct HealthMonitor {
    pool: Arc<BackendPool>,
    config: HealthCheckConfig,
    client: Client<HttpConnector, Body>,
}

impl HealthMonitor {
    pub fn new(pool: Arc<BackendPool>, config: HealthCheckConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            pool,
            config,
            client,
        }
    }

    /// Run the monitor loop. It never returns under normal operation:
    /// there is no shutdown protocol, the task dies with the process.
    pub async fn run(self) {
        if !self.config.enabled {
            tracing::info!("Active health checks disabled");
            return;
        }

        tracing::info!(
            interval_secs = self.config.interval_secs,
            timeout_secs = self.config.timeout_secs,
            backends = self.pool.backends().len(),
            "Health monitor starting"
        );

        let mut ticker = time::interval(Duration::from_secs(self.config.interval_secs));

        loop {
            ticker.tick().await;
            self.check_all().await;
        }
    }

    /// Run one probe cycle over every distinct backend.
    pub async fn check_all(&self) {
        for backend in self.pool.backends() {
            let alive = self.probe(backend).await;
            if alive != backend.is_alive() {
                tracing::info!(url = %backend.url, alive, "Backend liveness changed");
            }
            backend.set_alive(alive);
        }
    }

    /// Probe one backend. Success is status 200 with no transport error.
    async fn probe(&self, backend: &Backend) -> bool {
        let request = match Request::builder()
            .method("GET")
            .uri(backend.url.as_str())
            .header("user-agent", "wrr-balancer-health-check")
            .body(Body::empty())
        {
            Ok(req) => req,
            Err(e) => {
                tracing::error!(url = %backend.url, error = %e, "Failed to build probe request");
                return false;
            }
        };

        let timeout = Duration::from_secs(self.config.timeout_secs);

        match time::timeout(timeout, self.client.request(request)).await {
            Ok(Ok(response)) => {
                let status = response.status();
                // Drain the body so the connection is not left half-read.
                let _ = response.into_body().collect().await;
                if status == StatusCode::OK {
                    true
                } else {
                    tracing::warn!(url = %backend.url, status = %status, "Probe failed: non-200 status");
                    false
                }
            }
            Ok(Err(e)) => {
                tracing::warn!(url = %backend.url, error = %e, "Probe failed: connection error");
                false
            }
            Err(_) => {
                tracing::warn!(url = %backend.url, "Probe failed: timeout");
                false
            }
        }
    }
}
