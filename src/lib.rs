//! # advlock
//!
//! A lightweight TCP client for an advisory named-lock service, with:
//! - Lazy single-connection management with peer-close detection
//! - One-line protocol-version handshake per connection
//! - Line-oriented text framing (`set <key>` / `del <key>`)
//! - Typed connection/transport/protocol errors
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 LockClient                   │
//! │        set(key) / del(key) / close()         │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────▼───────────────────────┐
//! │                 Connection                   │
//! │   (lazy connect, handshake, line framing)    │
//! └──────────────────────┬───────────────────────┘
//!                        │ TCP
//! ┌──────────────────────▼───────────────────────┐
//! │               Lock Server                    │
//! │      (sole arbiter of all lock state)        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The server owns all lock state; this crate is a pure transport
//! wrapper. Locks are advisory: exclusion holds only between processes
//! that go through the server.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AdvlockError, Result};
pub use config::Config;
pub use client::LockClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the advlock client crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
