//! Response definitions
//!
//! Represents responses from the lock server.

/// Server status codes
///
/// The server prefixes every response with a 3-digit code. Codes the
/// client does not recognize are preserved in [`Status::Other`] rather
/// than rejected; the server remains free to grow its vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation succeeded
    Ok,

    /// The lock is already held
    AlreadyAcquired,

    /// The server rejected an empty key
    EmptyKey,

    /// The server did not recognize the command verb
    UnknownCommand,

    /// Release of a lock that is not held
    NotAcquired,

    /// A valid but unmapped server code
    Other(u16),
}

impl Status {
    /// Map a wire code to a status
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Status::Ok,
            1 => Status::AlreadyAcquired,
            2 => Status::EmptyKey,
            3 => Status::UnknownCommand,
            4 => Status::NotAcquired,
            other => Status::Other(other),
        }
    }

    /// The numeric wire code for this status
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 0,
            Status::AlreadyAcquired => 1,
            Status::EmptyKey => 2,
            Status::UnknownCommand => 3,
            Status::NotAcquired => 4,
            Status::Other(code) => *code,
        }
    }

    /// Whether this status reports success
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

/// A decoded response line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Numeric status code as sent on the wire
    pub code: u16,

    /// Human-readable detail after the comma (may be empty)
    pub message: String,
}

impl Response {
    /// Build a response from its parts
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The mapped status for this response
    pub fn status(&self) -> Status {
        Status::from_code(self.code)
    }
}
