use crate::config::LoggerConfig;
use crate::format::Formatter;
use crate::level::Severity;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Formats messages and emits them as `tracing` events in one call.
///
/// The formatted line becomes the event's message, at the `tracing` level
/// mapped from the severity. Filtered messages emit nothing.
#[derive(Clone, Debug)]
pub struct Logger {
    formatter: Formatter,
}

impl Logger {
    pub fn new(formatter: Formatter) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn log(&self, level: Severity, text: &str) {
        emit(level, &self.formatter.message(level, text));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn log_extended(
        &self,
        level: Severity,
        text: &str,
        report: Option<&BTreeMap<String, String>>,
        auth: Option<&BTreeMap<String, String>>,
        error_code: &str,
        error_name: &str,
        trace: &str,
    ) {
        let line = self
            .formatter
            .extended_message(level, text, report, auth, error_code, error_name, trace);
        emit(level, &line);
    }

    pub fn debug(&self, text: &str) {
        self.log(Severity::Debug, text);
    }

    pub fn info(&self, text: &str) {
        self.log(Severity::Info, text);
    }

    pub fn warning(&self, text: &str) {
        self.log(Severity::Warning, text);
    }

    pub fn error(&self, text: &str) {
        self.log(Severity::Error, text);
    }

    pub fn fatal(&self, text: &str) {
        self.log(Severity::Fatal, text);
    }
}

impl From<LoggerConfig> for Logger {
    fn from(config: LoggerConfig) -> Self {
        Self::new(Formatter::new(Arc::new(config)))
    }
}

fn emit(level: Severity, line: &str) {
    if line.is_empty() {
        return;
    }
    match level {
        Severity::Debug => tracing::debug!("{}", line),
        Severity::Info => tracing::info!("{}", line),
        Severity::Warning => tracing::warn!("{}", line),
        Severity::Error | Severity::Fatal => tracing::error!("{}", line),
    }
}
