//! Backend abstraction.
//!
//! # Responsibilities
//! - Represent a single distinct upstream server
//! - Track its liveness flag (written by the health monitor, read by
//!   the selection path)

use std::sync::atomic::{AtomicBool, Ordering};
use url::Url;

/// A single backend server.
///
/// The URL is immutable after construction. `alive` is the only mutable
/// field; it is shared between the health monitor (writer) and the
/// selector/dispatcher (readers), so it lives in an atomic rather than
/// behind a lock.
#[derive(Debug)]
pub struct Backend {
    /// Base URL that proxied requests and health probes are sent to.
    pub url: Url,
    /// Configured weight. Informational after pool construction: the weight
    /// is realized as slot duplication, not consulted at selection time.
    pub weight: i64,
    alive: AtomicBool,
}

impl Backend {
    /// Create a new backend, initially considered alive until the first
    /// probe cycle says otherwise.
    pub fn new(url: Url, weight: i64) -> Self {
        Self {
            url,
            weight,
            alive: AtomicBool::new(true),
        }
    }

    /// Return true if the most recent health probe succeeded.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Record a probe outcome. Written only by the health monitor.
    pub fn set_alive(&self, alive: bool) {
        self.alive.store(alive, Ordering::Relaxed);
    }
}
