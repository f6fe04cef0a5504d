//! Command definitions
//!
//! Represents requests sent to the lock server.

/// A client request
///
/// Keys are raw bytes; the client performs no validation. An embedded
/// newline corrupts the line framing and is the caller's responsibility
/// to avoid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Acquire the lock for a key
    Set { key: Vec<u8> },

    /// Release the lock for a key
    Del { key: Vec<u8> },
}

impl Command {
    /// Acquire command for a key
    pub fn set(key: impl Into<Vec<u8>>) -> Self {
        Command::Set { key: key.into() }
    }

    /// Release command for a key
    pub fn del(key: impl Into<Vec<u8>>) -> Self {
        Command::Del { key: key.into() }
    }

    /// The wire verb for this command
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Set { .. } => "set",
            Command::Del { .. } => "del",
        }
    }

    /// The key this command operates on
    pub fn key(&self) -> &[u8] {
        match self {
            Command::Set { key } | Command::Del { key } => key,
        }
    }
}
