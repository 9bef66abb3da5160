//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Periodic timer (monitor.rs)
//!     → HTTP GET each distinct backend address
//!     → success (status exactly 200, no transport error) → alive = true
//!     → any other outcome (timeout, refusal, non-200) → alive = false
//! ```
//!
//! # Design Decisions
//! - Probes go to distinct addresses, not pool slots, so a weight-5
//!   backend is probed once per cycle
//! - A single probe outcome flips the flag; there is no hysteresis
//! - Probe failures never stop the loop; the loop has no shutdown
//!   protocol, the process exiting is the only stop condition

pub mod monitor;

pub use monitor::HealthMonitor;
