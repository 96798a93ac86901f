//! Single-line JSON log formatting.
//!
//! [`Formatter`] turns a severity and message (optionally with report,
//! auth, error and trace payloads) into one JSON line, returning an empty
//! string for messages below the configured level. [`init`] installs the
//! configuration and routes `tracing` output through a
//! [`NormalizingWriter`], which lowercases JSON keys before the line
//! reaches its destination.

pub mod level;
pub mod config;
pub mod record;
pub mod format;
pub mod normalize;
pub mod sink;
pub mod layer;

pub mod init;
pub mod logger;

pub use config::LoggerConfig;
pub use format::{format_extended_message, format_message, Formatter, JSON_ERROR_SENTINEL};
pub use init::{init, init_with_writer, reconfigure, InitError};
pub use level::{should_emit, ParseSeverityError, Severity};
pub use logger::Logger;
pub use normalize::{normalize_key_bytes, normalize_keys};
pub use sink::{NormalizingMakeWriter, NormalizingWriter};

/// `tracing` target of this crate's own diagnostics. Events with this
/// target are never written through [`layer::LineFormat`].
pub const INTERNAL_TARGET: &str = "json_log_line";
