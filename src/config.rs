use crate::level::Severity;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::{Arc, RwLock};

/// Identity and threshold shared by every formatting call.
///
/// **Fields**
/// - `name`: written into the `source` field of each entry.
/// - `level`: minimum severity; messages below it format to an empty
///   string.
///
/// Configure once, before any logging. Re-initialising replaces the
/// whole value; racing a re-initialisation against formatting calls is
/// not supported.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub level: Severity,
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>, level: Severity) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

static CURRENT: Lazy<RwLock<Option<Arc<LoggerConfig>>>> = Lazy::new(|| RwLock::new(None));

/// Install `config` as the process-wide configuration, replacing any
/// previous one.
pub fn install(config: LoggerConfig) -> Arc<LoggerConfig> {
    let config = Arc::new(config);
    let previous = CURRENT
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .replace(Arc::clone(&config));

    // The lock is released here: subscribers may read the configuration
    // back while handling this event.
    if let Some(previous) = previous {
        tracing::debug!(
            target: crate::INTERNAL_TARGET,
            previous = %previous.name,
            name = %config.name,
            "replacing logger configuration"
        );
    }
    config
}

/// Currently installed configuration, or [`LoggerConfig::default`] when
/// nothing has been installed yet.
pub fn current() -> Arc<LoggerConfig> {
    let slot = CURRENT.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    match slot.as_ref() {
        Some(config) => Arc::clone(config),
        None => Arc::new(LoggerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[test]
    fn default_is_unnamed_debug() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, "");
        assert_eq!(config.level, Severity::Debug);
    }

    #[test]
    fn deserializes_level_by_name() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"name":"svc","level":"warn"}"#).unwrap();
        assert_eq!(config, LoggerConfig::new("svc", Severity::Warning));

        let partial: LoggerConfig = serde_json::from_str(r#"{"name":"svc"}"#).unwrap();
        assert_eq!(partial.level, Severity::Debug);

        assert!(serde_json::from_str::<LoggerConfig>(r#"{"level":"loud"}"#).is_err());
    }

    /// Layer that formats a line through the global configuration for
    /// every event it sees.
    struct FormatsOnEvent;

    impl<S: Subscriber> Layer<S> for FormatsOnEvent {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            let _ = crate::format::format_message(Severity::Info, "nested");
        }
    }

    // Single test: the global slot is shared by every test in this binary.
    #[test]
    fn install_replaces_wholesale_and_allows_reentrant_reads() {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let subscriber = tracing_subscriber::registry().with(FormatsOnEvent);
            tracing::subscriber::with_default(subscriber, || {
                install(LoggerConfig::new("first", Severity::Error));
                install(LoggerConfig::new("second", Severity::Info));
            });
            tx.send(current()).unwrap();
        });

        let installed = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("install blocked while a layer read the configuration");
        assert_eq!(*installed, LoggerConfig::new("second", Severity::Info));
    }
}
