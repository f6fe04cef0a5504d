//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! <verb> <key>\n           verb is "set" or "del", key is raw bytes
//! ```
//!
//! ### Handshake Format
//! ```text
//! <version>\n              sent once per connection, no response
//! ```
//!
//! ### Response Format
//! ```text
//! <3-digit code>,<message>\n
//! ```
//!
//! The 3-digit code plus comma prefix is the validation boundary: a line
//! without it is malformed, and the message is the raw remainder up to
//! (not including) the newline.

use std::io::{BufRead, Write};

use super::{Command, Response, PROTOCOL_VERSION};
use crate::error::{AdvlockError, Result};

/// Fixed length of the `NNN,` response prefix
const RESPONSE_PREFIX_LEN: usize = 4;

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command to wire bytes
///
/// Format: verb + space + key bytes + newline
pub fn encode_command(command: &Command) -> Vec<u8> {
    let verb = command.verb().as_bytes();
    let key = command.key();

    let mut line = Vec::with_capacity(verb.len() + 1 + key.len() + 1);
    line.extend_from_slice(verb);
    line.push(b' ');
    line.extend_from_slice(key);
    line.push(b'\n');

    line
}

/// Encode the handshake line announcing the protocol version
pub fn encode_handshake() -> Vec<u8> {
    let mut line = Vec::with_capacity(PROTOCOL_VERSION.len() + 1);
    line.extend_from_slice(PROTOCOL_VERSION.as_bytes());
    line.push(b'\n');
    line
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a response line
///
/// Accepts the line with or without its trailing newline. Returns a
/// protocol error unless the line starts with exactly three ASCII digits
/// followed by a comma.
pub fn decode_response(line: &[u8]) -> Result<Response> {
    let line = match line.last() {
        Some(b'\n') => &line[..line.len() - 1],
        _ => line,
    };

    if line.len() < RESPONSE_PREFIX_LEN {
        return Err(malformed(line));
    }

    let (prefix, message) = line.split_at(RESPONSE_PREFIX_LEN);
    if prefix[3] != b',' || !prefix[..3].iter().all(u8::is_ascii_digit) {
        return Err(malformed(line));
    }

    let code = prefix[..3]
        .iter()
        .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'));

    Ok(Response::new(
        code,
        String::from_utf8_lossy(message).into_owned(),
    ))
}

fn malformed(line: &[u8]) -> AdvlockError {
    AdvlockError::Protocol(format!(
        "malformed response ({})",
        String::from_utf8_lossy(line)
    ))
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    let line = encode_command(command);
    writer.write_all(&line).map_err(AdvlockError::Transport)?;
    writer.flush().map_err(AdvlockError::Transport)?;
    Ok(())
}

/// Write the handshake line to a stream
pub fn write_handshake<W: Write>(writer: &mut W) -> Result<()> {
    let line = encode_handshake();
    writer.write_all(&line).map_err(AdvlockError::Transport)?;
    writer.flush().map_err(AdvlockError::Transport)?;
    Ok(())
}

/// Read one response line from a stream and decode it
///
/// Blocks until a newline arrives, the read timeout elapses, or the peer
/// closes the connection. A read that yields no data at all is a
/// transport error, not a protocol error: there was no line to parse.
pub fn read_response<R: BufRead>(reader: &mut R, line_buf: &mut Vec<u8>) -> Result<Response> {
    line_buf.clear();
    let bytes = reader
        .read_until(b'\n', line_buf)
        .map_err(AdvlockError::Transport)?;
    if bytes == 0 {
        return Err(AdvlockError::unexpected_eof());
    }
    decode_response(line_buf)
}
