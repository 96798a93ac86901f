use crate::config::{self, LoggerConfig};
use crate::format::Formatter;
use crate::layer::LineFormat;
use crate::level::Severity;
use crate::logger::Logger;
use crate::sink::NormalizingMakeWriter;
use crate::INTERNAL_TARGET;
use once_cell::sync::OnceCell;
use std::io;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

static SUBSCRIBER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Error returned by [`init`] / [`init_with_writer`].
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("a global tracing subscriber is already installed")]
    SubscriberAlreadySet(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize logging to stdout.
///
/// **Parameters**
/// - `name`: logger name, written as `source` in every entry.
/// - `level`: minimum severity to emit.
///
/// Equivalent to [`init_with_writer`] with `std::io::stdout`.
pub fn init(name: impl Into<String>, level: Severity) -> Result<Logger, InitError> {
    init_with_writer(name, level, io::stdout)
}

/// Install the process-wide configuration and route `tracing` output
/// through a key-normalizing writer built on `make_writer`.
///
/// **Effects**
///
/// The configuration is always installed, replacing any previous one.
/// The first successful call also installs a [`Registry`] with a fmt
/// layer using [`LineFormat`] as the global default subscriber, so lines
/// carry no prefix, timestamp or level of their own. Later calls keep
/// that subscriber and its writer, drop `make_writer` (logged at `debug`
/// under [`INTERNAL_TARGET`]) and only change the configuration; use
/// [`reconfigure`] for that directly.
///
/// **Returns**
/// - a [`Logger`] bound to the new configuration;
/// - `Err(InitError::SubscriberAlreadySet)` if another global subscriber
///   was installed by someone else. The configuration is installed
///   regardless.
pub fn init_with_writer<M>(
    name: impl Into<String>,
    level: Severity,
    make_writer: M,
) -> Result<Logger, InitError>
where
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let logger = reconfigure(name, level);

    let mut installed_now = false;
    SUBSCRIBER_INSTALLED.get_or_try_init(|| {
        installed_now = true;
        let line_layer = tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_writer(NormalizingMakeWriter::new(make_writer))
            .with_filter(filter_fn(|meta| meta.target() != INTERNAL_TARGET));
        let subscriber = Registry::default().with(line_layer);
        tracing::subscriber::set_global_default(subscriber)
    })?;

    if !installed_now {
        tracing::debug!(
            target: INTERNAL_TARGET,
            "subscriber already installed, ignoring the new make_writer"
        );
    }
    Ok(logger)
}

/// Replace the process-wide configuration without touching the
/// installed subscriber or its writer.
pub fn reconfigure(name: impl Into<String>, level: Severity) -> Logger {
    let config = config::install(LoggerConfig::new(name, level));
    Logger::new(Formatter::new(config))
}
