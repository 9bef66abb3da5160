//! Weighted backend pool and round-robin selection.
//!
//! # Responsibilities
//! - Build the pool from configuration (parse, filter, weight-expand)
//! - Select the next live backend via an atomic round-robin cursor
//! - Expose the distinct backend list for health checking

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::balancer::backend::Backend;
use crate::config::schema::BackendEntry;

/// Fatal pool construction errors.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Every configured entry was skipped (bad URL or non-positive weight).
    #[error("no usable backends after filtering configuration")]
    Empty,
}

/// The weight-expanded pool of selectable backends.
///
/// `backends` holds one record per distinct address; `slots` holds one
/// index per unit of weight, so a backend with weight `w` occupies `w`
/// slots that all alias the same record (and thus the same liveness
/// flag). Both are immutable after construction; the cursor is the only
/// mutable pool state.
#[derive(Debug)]
pub struct BackendPool {
    backends: Vec<Arc<Backend>>,
    slots: Vec<usize>,
    cursor: AtomicUsize,
}

impl BackendPool {
    /// Build the pool from configuration entries.
    ///
    /// Entries with unparseable URLs are logged and skipped; entries with
    /// weight ≤ 0 contribute no slots. Duplicate URLs collapse onto one
    /// backend record so each distinct address is probed once per health
    /// cycle. An empty pool after filtering is a startup failure.
    pub fn from_entries(entries: &[BackendEntry]) -> Result<Self, PoolError> {
        let mut backends: Vec<Arc<Backend>> = Vec::new();
        let mut by_url: HashMap<String, usize> = HashMap::new();
        let mut slots: Vec<usize> = Vec::new();

        for entry in entries {
            let url = match Url::parse(&entry.url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(url = %entry.url, error = %e, "Skipping backend with invalid URL");
                    continue;
                }
            };

            if entry.weight <= 0 {
                tracing::warn!(url = %entry.url, weight = entry.weight, "Skipping backend with non-positive weight");
                continue;
            }

            let index = match by_url.get(url.as_str()) {
                Some(&index) => index,
                None => {
                    let index = backends.len();
                    by_url.insert(url.as_str().to_string(), index);
                    backends.push(Arc::new(Backend::new(url, entry.weight)));
                    index
                }
            };

            for _ in 0..entry.weight {
                slots.push(index);
            }
        }

        if slots.is_empty() {
            return Err(PoolError::Empty);
        }

        Ok(Self {
            backends,
            slots,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Select the next live backend.
    ///
    /// Each attempt atomically advances the cursor by one and examines the
    /// slot at `cursor mod n`. Dead slots are skipped; after `n` attempts
    /// (one full pass) without finding a live backend this returns `None`.
    /// `None` means "no backend currently considered alive" and is a
    /// normal condition, not an error.
    pub fn select_next(&self) -> Option<Arc<Backend>> {
        let n = self.slots.len();
        for _ in 0..n {
            // fetch_add wraps on overflow; only the modulo result matters.
            let index = self.cursor.fetch_add(1, Ordering::Relaxed) % n;
            let backend = &self.backends[self.slots[index]];
            if backend.is_alive() {
                return Some(Arc::clone(backend));
            }
        }
        None
    }

    /// Distinct backends, one per unique address (for health checking).
    pub fn backends(&self) -> &[Arc<Backend>] {
        &self.backends
    }

    /// Total number of weight-expanded slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
