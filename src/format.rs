use crate::config::{self, LoggerConfig};
use crate::level::{should_emit, Severity};
use crate::record::{ErrorInfo, ExtendedLogEntry, ExtendedMessage, LogEntry, Message};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Returned in place of a line when an entry cannot be serialized.
pub const JSON_ERROR_SENTINEL: &str = "getMessage: JSON error, incorrect logging";

/// `chrono` pattern for the `timestamp` field: UTC, milliseconds, literal
/// `+0000` offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f+0000";

/// Render `ts` as `YYYY-MM-DDTHH:MM:SS.mmm+0000`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Serialize one entry to a single JSON line, degrading to
/// [`JSON_ERROR_SENTINEL`] on failure.
pub(crate) fn to_line<T: Serialize + ?Sized>(entry: &T) -> String {
    match serde_json::to_string(entry) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!(target: crate::INTERNAL_TARGET, error = %e, "failed to serialize log entry");
            JSON_ERROR_SENTINEL.to_string()
        }
    }
}

/// Builds JSON log lines for a fixed [`LoggerConfig`].
///
/// Both entry points return an empty string when the message severity is
/// below the configured threshold; callers treat that as "nothing to
/// emit". Neither ever fails: serialization problems collapse into
/// [`JSON_ERROR_SENTINEL`].
#[derive(Clone, Debug)]
pub struct Formatter {
    config: Arc<LoggerConfig>,
}

impl Formatter {
    pub fn new(config: Arc<LoggerConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Format a simple message stamped with the current time.
    ///
    /// **Parameters**
    /// - `level`: message severity, compared against the configured level.
    /// - `text`: free-form message text.
    ///
    /// **Returns**
    /// - the JSON line, an empty string if filtered, or the sentinel.
    pub fn message(&self, level: Severity, text: &str) -> String {
        self.message_at(level, text, Utc::now())
    }

    /// Same as [`Formatter::message`] with an explicit timestamp.
    pub fn message_at(&self, level: Severity, text: &str, now: DateTime<Utc>) -> String {
        if !should_emit(self.config.level, level) {
            return String::new();
        }
        to_line(&LogEntry {
            source: &self.config.name,
            log_level: level.as_str(),
            timestamp: format_timestamp(now),
            message: Message { message: text },
        })
    }

    /// Format an extended message stamped with the current time.
    ///
    /// `report` and `auth` may be `None`, which serializes as `null`.
    /// `error_code` and `error_name` are copied verbatim into the `error`
    /// object, which is present even when both are empty.
    #[allow(clippy::too_many_arguments)]
    pub fn extended_message(
        &self,
        level: Severity,
        text: &str,
        report: Option<&BTreeMap<String, String>>,
        auth: Option<&BTreeMap<String, String>>,
        error_code: &str,
        error_name: &str,
        trace: &str,
    ) -> String {
        self.extended_message_at(
            level,
            text,
            report,
            auth,
            error_code,
            error_name,
            trace,
            Utc::now(),
        )
    }

    /// Same as [`Formatter::extended_message`] with an explicit timestamp.
    #[allow(clippy::too_many_arguments)]
    pub fn extended_message_at(
        &self,
        level: Severity,
        text: &str,
        report: Option<&BTreeMap<String, String>>,
        auth: Option<&BTreeMap<String, String>>,
        error_code: &str,
        error_name: &str,
        trace: &str,
        now: DateTime<Utc>,
    ) -> String {
        if !should_emit(self.config.level, level) {
            return String::new();
        }
        to_line(&ExtendedLogEntry {
            source: &self.config.name,
            log_level: level.as_str(),
            timestamp: format_timestamp(now),
            message: ExtendedMessage {
                message: text,
                report,
                auth,
                error: ErrorInfo {
                    code: error_code,
                    name: error_name,
                },
                trace,
            },
        })
    }
}

impl From<LoggerConfig> for Formatter {
    fn from(config: LoggerConfig) -> Self {
        Self::new(Arc::new(config))
    }
}

/// Format a simple message using the process-wide configuration.
pub fn format_message(level: Severity, text: &str) -> String {
    Formatter::new(config::current()).message(level, text)
}

/// Format an extended message using the process-wide configuration.
pub fn format_extended_message(
    level: Severity,
    text: &str,
    report: Option<&BTreeMap<String, String>>,
    auth: Option<&BTreeMap<String, String>>,
    error_code: &str,
    error_name: &str,
    trace: &str,
) -> String {
    Formatter::new(config::current())
        .extended_message(level, text, report, auth, error_code, error_name, trace)
}
