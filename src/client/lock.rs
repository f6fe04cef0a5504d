//! Lock Client
//!
//! The public client for acquiring and releasing named advisory locks.

use crate::client::Connection;
use crate::config::Config;
use crate::error::Result;
use crate::protocol::{Command, Response};

/// Client for a remote advisory named-lock service
///
/// The client owns at most one TCP connection, opened lazily on the
/// first operation and replaced transparently when the server closes
/// it. Operations take `&mut self`, so shared use across threads is a
/// compile error; spin up one client per concurrent worker instead.
///
/// ```no_run
/// use advlock::LockClient;
///
/// let mut client = LockClient::new("tcp://127.0.0.1:49915");
/// if client.set(b"reindex-job")? {
///     // ... exclusive work ...
///     client.del(b"reindex-job")?;
/// }
/// # Ok::<(), advlock::AdvlockError>(())
/// ```
pub struct LockClient {
    config: Config,
    connection: Option<Connection>,
}

impl LockClient {
    /// Create a client for the given endpoint with default timeouts
    ///
    /// Performs no I/O; the connection is opened on the first operation.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_config(Config::new(endpoint))
    }

    /// Create a client from an explicit configuration
    ///
    /// Performs no I/O.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            connection: None,
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Acquire the lock for a key
    ///
    /// Returns `true` when the server grants the lock, `false` for any
    /// other status (already held, empty key, unmapped codes). Transport
    /// and protocol failures are errors, never `false`.
    ///
    /// The key is sent as-is; an embedded newline corrupts the line
    /// framing, keeping it out is the caller's responsibility.
    pub fn set(&mut self, key: impl AsRef<[u8]>) -> Result<bool> {
        let response = self.request(Command::set(key.as_ref()))?;
        Ok(response.status().is_ok())
    }

    /// Release the lock for a key
    ///
    /// Returns `true` when the server releases the lock, `false`
    /// otherwise (typically: the lock was not held).
    pub fn del(&mut self, key: impl AsRef<[u8]>) -> Result<bool> {
        let response = self.request(Command::del(key.as_ref()))?;
        Ok(response.status().is_ok())
    }

    /// Close the connection if one is open
    ///
    /// Idempotent. The next operation reconnects lazily, handshake
    /// included. No farewell is sent; the server releases this
    /// connection's locks on disconnect.
    pub fn close(&mut self) {
        if let Some(conn) = self.connection.take() {
            tracing::debug!("Closing connection to {}", conn.peer_addr());
        }
    }

    /// Run one command against the server
    fn request(&mut self, command: Command) -> Result<Response> {
        let conn = self.ensure_connected()?;
        conn.round_trip(&command)
    }

    /// Return the live connection, opening or replacing it as needed
    ///
    /// Sole creation point for connections: at most one exists per
    /// client at any time. A handle whose peer has gone away is dropped
    /// and replaced before the command goes out.
    fn ensure_connected(&mut self) -> Result<&mut Connection> {
        if let Some(conn) = &self.connection {
            if conn.is_closed_by_peer() {
                tracing::debug!(
                    "Peer {} closed the connection; reconnecting",
                    conn.peer_addr()
                );
                self.connection = None;
            }
        }

        match self.connection {
            Some(ref mut conn) => Ok(conn),
            None => {
                let conn = Connection::open(&self.config)?;
                Ok(self.connection.insert(conn))
            }
        }
    }
}

impl Drop for LockClient {
    /// Dropping the client closes the connection on every exit path
    fn drop(&mut self) {
        self.close();
    }
}
