//! Configuration for the advlock client
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 60;

/// Default read timeout (seconds)
const DEFAULT_READ_TIMEOUT_SECS: u64 = 4;

/// Main configuration for a [`LockClient`](crate::LockClient) instance
///
/// Set once at construction; immutable for the client's lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server endpoint, either `host:port` or a `tcp://host:port` DSN
    pub endpoint: String,

    /// Timeout for establishing the TCP connection
    pub connect_timeout: Duration,

    /// Timeout applied to reads on the established connection
    pub read_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "127.0.0.1:49915".to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Create a config for the given endpoint with default timeouts
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The endpoint with any `tcp://` scheme prefix stripped,
    /// ready for socket address resolution
    pub(crate) fn host_port(&self) -> &str {
        self.endpoint
            .strip_prefix("tcp://")
            .unwrap_or(&self.endpoint)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server endpoint (`host:port` or `tcp://host:port`)
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the connection-establishment timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
