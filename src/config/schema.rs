//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Server configuration.
///
/// Immutable after construction. The timeouts are configuration
/// defaults rather than hard-coded literals so tests can shorten them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum time to read a request's headers (default: 60s).
    pub header_read_timeout_secs: u64,

    /// Maximum time allotted for graceful shutdown (default: 5s).
    pub shutdown_grace_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            header_read_timeout_secs: 60,
            shutdown_grace_secs: 5,
        }
    }
}

impl ServerConfig {
    /// Create a config for `bind_address` with default timeouts.
    pub fn new(bind_address: impl Into<String>) -> Self {
        Self {
            bind_address: bind_address.into(),
            ..Self::default()
        }
    }

    /// Header-read timeout as a [`Duration`].
    pub fn header_read_timeout(&self) -> Duration {
        Duration::from_secs(self.header_read_timeout_secs)
    }

    /// Shutdown grace period as a [`Duration`].
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
