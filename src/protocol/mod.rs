//! Protocol Module
//!
//! Defines the wire protocol spoken with the lock server.
//!
//! ## Protocol Format (V0.1 - Line-Oriented Text)
//!
//! All traffic is newline-delimited text. One request produces one
//! response line, except the handshake which the server accepts silently.
//!
//! ### Handshake (once per connection)
//! ```text
//! <version>\n              e.g. "0.1\n"
//! ```
//!
//! ### Requests
//! ```text
//! set <key>\n              acquire the lock named <key>
//! del <key>\n              release the lock named <key>
//! ```
//!
//! ### Responses
//! ```text
//! <3-digit code>,<message>\n     e.g. "000,OK\n"
//! ```
//!
//! ### Status Codes
//! - 000: OK
//! - 001: ALREADY_ACQUIRED
//! - 002: EMPTY_KEY
//! - 003: UNKNOWN_COMMAND
//! - 004: NOT_ACQUIRED

mod command;
mod response;
mod codec;

pub use command::Command;
pub use response::{Response, Status};
pub use codec::{
    decode_response, encode_command, encode_handshake, read_response, write_command,
    write_handshake,
};

/// Protocol version token announced in the handshake line
pub const PROTOCOL_VERSION: &str = "0.1";
