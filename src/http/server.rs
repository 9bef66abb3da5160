//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all dispatch handler
//! - Spawn the background health monitor
//! - Select a backend per request and relay its response verbatim

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::uri::{Authority, Scheme},
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::balancer::{Backend, BackendPool};
use crate::config::schema::HealthCheckConfig;
use crate::health::HealthMonitor;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<BackendPool>,
    pub client: Client<HttpConnector, Body>,
}

/// HTTP server fronting the backend pool.
pub struct HttpServer {
    router: Router,
    pool: Arc<BackendPool>,
    health_config: HealthCheckConfig,
}

impl HttpServer {
    /// Create a new server over an already-built pool.
    pub fn new(pool: Arc<BackendPool>, health_config: HealthCheckConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            pool: pool.clone(),
            client,
        };

        let router = Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Self {
            router,
            pool,
            health_config,
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let monitor = HealthMonitor::new(self.pool.clone(), self.health_config.clone());
        tokio::spawn(async move {
            monitor.run().await;
        });

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Per-request dispatch: pick the next live backend and forward, or
/// answer 503 when the pool has none.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();
    let method = request.method().clone();

    let backend = match state.pool.select_next() {
        Some(backend) => backend,
        None => {
            tracing::warn!(method = %method, path = %path, "No healthy backends available");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service unavailable: no healthy backends",
            )
                .into_response();
        }
    };

    tracing::debug!(method = %method, path = %path, backend = %backend.url, "Proxying request");

    match forward(&state.client, &backend, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(backend = %backend.url, error = %e, "Upstream request failed");
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}

/// Rewrite the request URI onto the backend's authority and relay the
/// upstream response (status, headers, body) untouched.
async fn forward(
    client: &Client<HttpConnector, Body>,
    backend: &Backend,
    request: Request<Body>,
) -> Result<Response, hyper_util::client::legacy::Error> {
    let (parts, body) = request.into_parts();

    let mut uri_parts = parts.uri.clone().into_parts();
    uri_parts.scheme = Some(Scheme::HTTP);
    if let Ok(authority) = Authority::from_str(backend.url.authority()) {
        uri_parts.authority = Some(authority);
    }
    let uri = Uri::from_parts(uri_parts).unwrap_or(parts.uri);

    let mut builder = Request::builder().method(parts.method).uri(uri);
    if let Some(headers) = builder.headers_mut() {
        for (name, value) in parts.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
    }
    // Builder cannot fail here: method and URI are already validated.
    let outbound = builder.body(body).unwrap();

    let response = client.request(outbound).await?;
    let (parts, body) = response.into_parts();
    Ok(Response::from_parts(parts, Body::new(body)))
}
