//! Load balancing subsystem.
//!
//! # Data Flow
//! ```text
//! config entries (url, weight)
//!     → pool.rs (parse URLs, expand weights into slots)
//!     → BackendPool (distinct backends + slot index array + cursor)
//!
//! Per request:
//!     dispatcher → pool.select_next()
//!         → atomic cursor advance, skip dead slots, at most one full pass
//!         → Some(backend) or None
//! ```
//!
//! # Design Decisions
//! - One `Backend` record per distinct address; slots are indices into that
//!   arena, so all weight-duplicates of a backend share one liveness cell
//! - Weight is realized purely as slot duplication plus a circular scan;
//!   there is no weighted-fair-queueing scheduler
//! - Selection is lock-free: an atomic cursor and per-backend atomic flags

pub mod backend;
pub mod pool;

pub use backend::Backend;
pub use pool::BackendPool;
