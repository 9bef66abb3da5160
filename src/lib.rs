//! Weighted round-robin HTTP load balancer.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────┐
//!                      │               LOAD BALANCER                │
//!   Client Request     │  ┌────────┐    ┌──────────┐   ┌─────────┐ │
//!   ───────────────────┼─▶│  http  │───▶│ balancer │──▶│ forward │─┼──▶ Backend
//!                      │  │ server │    │   pool   │   │ (hyper) │ │
//!   Client Response    │  └────────┘    └────▲─────┘   └─────────┘ │
//!   ◀──────────────────┼──────────────────── │ ──────────────────── │
//!                      │               ┌─────┴─────┐               │
//!                      │               │  health   │  (background  │
//!                      │               │  monitor  │   probe loop) │
//!                      │               └───────────┘               │
//!                      └───────────────────────────────────────────┘
//! ```
//!
//! The pool is built once at startup from a JSON backend list and never
//! resized. The health monitor is the only writer of liveness state; the
//! dispatch path only reads it.

pub mod balancer;
pub mod config;
pub mod health;
pub mod http;

pub use balancer::{Backend, BackendPool};
pub use config::{BackendEntry, HealthCheckConfig};
pub use health::HealthMonitor;
pub use http::HttpServer;
