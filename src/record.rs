use serde::Serialize;
use std::collections::BTreeMap;

/// Simple log entry: `{source, log_level, timestamp, message: {message}}`.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry<'a> {
    pub source: &'a str,
    pub log_level: &'static str,
    pub timestamp: String,
    pub message: Message<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message<'a> {
    pub message: &'a str,
}

/// Extended log entry carrying report, auth, error and trace payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ExtendedLogEntry<'a> {
    pub source: &'a str,
    pub log_level: &'static str,
    pub timestamp: String,
    pub message: ExtendedMessage<'a>,
}

/// Payload of an [`ExtendedLogEntry`].
///
/// Absent `report`/`auth` maps serialize as `null`; the keys themselves
/// are always present. `error` is always present, even with empty code
/// and name.
#[derive(Debug, Clone, Serialize)]
pub struct ExtendedMessage<'a> {
    pub message: &'a str,
    pub report: Option<&'a BTreeMap<String, String>>,
    pub auth: Option<&'a BTreeMap<String, String>>,
    pub error: ErrorInfo<'a>,
    pub trace: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo<'a> {
    pub code: &'a str,
    pub name: &'a str,
}
