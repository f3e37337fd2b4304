//! # srvctl-core - Core Domain Types
//!
//! Foundation crate for Server Control. Provides the domain types, the
//! connection registry with its mock data, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Connection`] - A simulated remote host with fixed CPU/RAM readings
//! - [`ConnectionStatus`] - Online, offline or idle
//! - [`LogEntry`], [`Severity`] - Event log line and its severity
//! - [`CommandEntry`] - A submitted terminal command and its canned output
//! - [`LoadLevel`] - Normal/elevated/critical classification for gauges
//!
//! ### Registry (`registry`)
//! - [`Registry`] - Immutable list of connections with unique ids
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use srvctl_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod mock;
pub mod prelude;
pub mod registry;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use registry::Registry;
pub use types::{CommandEntry, Connection, ConnectionStatus, LoadLevel, LogEntry, Severity};
