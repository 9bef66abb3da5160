//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// One backend record from the JSON config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendEntry {
    /// Backend base URL (e.g., "http://127.0.0.1:9001").
    pub url: String,

    /// Weight: how many selection slots this backend occupies (default: 1).
    /// Zero or negative disables the entry.
    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}

/// Health check settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Enable the background health monitor.
    pub enabled: bool,

    /// Probe interval in seconds.
    pub interval_secs: u64,

    /// Per-probe timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 10,
            timeout_secs: 5,
        }
    }
}
