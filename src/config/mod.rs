//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON array of {url, weight})
//!     → loader.rs (read & deserialize)
//!     → Vec<BackendEntry>
//!     → balancer::pool (parse URLs, weight-expand, filter)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no hot reload
//! - Syntactic problems (unreadable file, bad JSON) are startup-fatal
//! - Per-entry problems (bad URL, non-positive weight) are handled later
//!   by the pool builder, which skips and logs them

pub mod loader;
pub mod schema;

pub use loader::{load_backends, ConfigError};
pub use schema::{BackendEntry, HealthCheckConfig};
