//! Connection Handler
//!
//! Owns a single TCP connection to the lock server.

use std::io::{self, BufReader};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use crate::config::Config;
use crate::error::{AdvlockError, Result};
use crate::protocol::{read_response, write_command, write_handshake, Command, Response};

/// A single established connection to the lock server
///
/// The reader is buffered for line reads; the line buffer is reused
/// across calls. Between calls no partial line stays buffered: every
/// request writes one whole line and reads one whole line back.
pub(crate) struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// Reusable response line buffer
    line_buf: Vec<u8>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Establish a connection and perform the handshake
    ///
    /// Connect failures (resolution, refusal, connect timeout) are
    /// connection errors carrying the endpoint; a handshake write
    /// failure is a transport error, the socket was already open.
    pub fn open(config: &Config) -> Result<Self> {
        let stream = connect_stream(config).map_err(|source| AdvlockError::Connection {
            endpoint: config.endpoint.clone(),
            source,
        })?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true).map_err(|source| AdvlockError::Connection {
            endpoint: config.endpoint.clone(),
            source,
        })?;

        let mut conn = Self {
            reader: BufReader::new(stream),
            line_buf: Vec::with_capacity(128),
            peer_addr,
        };

        write_handshake(conn.reader.get_mut())?;
        tracing::debug!("Connection established to {}", conn.peer_addr);

        Ok(conn)
    }

    /// Check whether the peer has closed its end of the connection
    ///
    /// Uses a non-blocking one-byte peek: end-of-stream means closed,
    /// `WouldBlock` means alive and idle. Any socket configuration
    /// failure is treated as closed so the caller replaces the handle.
    pub fn is_closed_by_peer(&self) -> bool {
        let stream = self.reader.get_ref();

        if stream.set_nonblocking(true).is_err() {
            return true;
        }

        let mut probe = [0u8; 1];
        let closed = match stream.peek(&mut probe) {
            Ok(0) => true,
            Ok(_) => false,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => false,
            Err(_) => true,
        };

        if stream.set_nonblocking(false).is_err() {
            return true;
        }

        closed
    }

    /// Send one command and read its response line
    pub fn round_trip(&mut self, command: &Command) -> Result<Response> {
        write_command(self.reader.get_mut(), command)?;
        let response = read_response(&mut self.reader, &mut self.line_buf)?;

        tracing::trace!(
            "{} -> {:03},{}",
            command.verb(),
            response.code,
            response.message
        );

        Ok(response)
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Resolve the endpoint and connect, bounded by the connect timeout
///
/// Multi-homed hosts are tried in resolution order; the last error wins
/// if none accepts.
fn connect_stream(config: &Config) -> io::Result<TcpStream> {
    let addrs: Vec<SocketAddr> = config.host_port().to_socket_addrs()?.collect();

    let mut last_err = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, config.connect_timeout) {
            Ok(stream) => {
                stream.set_read_timeout(Some(config.read_timeout))?;
                return Ok(stream);
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "endpoint resolved to no addresses",
        )
    }))
}
