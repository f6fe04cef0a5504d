//! Error types for the advlock client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using AdvlockError
pub type Result<T> = std::result::Result<T, AdvlockError>;

/// Unified error type for advlock client operations
///
/// Server status codes are never errors; they are mapped to boolean
/// outcomes by the client. Only connection, transport and protocol
/// failures surface here.
#[derive(Debug, Error)]
pub enum AdvlockError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// The TCP connection could not be established (refused, resolution
    /// failure, connect timeout).
    #[error("could not establish connection to {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// A read or write on an established connection failed (broken pipe,
    /// read timeout, unexpected EOF).
    #[error("transport error: {0}")]
    Transport(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// A response line did not match the expected `<code>,<message>` shape.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl AdvlockError {
    /// Build a transport error for a read that returned no data.
    pub(crate) fn unexpected_eof() -> Self {
        AdvlockError::Transport(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "connection closed before a full response line was read",
        ))
    }
}
