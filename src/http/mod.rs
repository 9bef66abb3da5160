//! HTTP server and request dispatch.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (axum catch-all handler)
//!     → pool.select_next()
//!         → Some(backend): rewrite URI authority, forward, relay response
//!         → None: synthesize 503 Service Unavailable
//! ```
//!
//! # Design Decisions
//! - No retries, no queueing: selection failure is answered immediately
//! - The dispatcher never mutates liveness state; only the health
//!   monitor writes it

pub mod server;

pub use server::HttpServer;
