use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Message severity, ordered from least to most severe.
///
/// `WARN` and `CRITICAL` are aliases, not distinct levels: they compare
/// equal to [`Severity::Warning`] and [`Severity::Fatal`] and render with
/// the canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Alias of [`Severity::Warning`].
    pub const WARN: Severity = Severity::Warning;
    /// Alias of [`Severity::Fatal`].
    pub const CRITICAL: Severity = Severity::Fatal;

    /// Canonical uppercase name, as written into `log_level`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// `tracing` level used when a formatted line is emitted.
    pub fn tracing_level(&self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warning => tracing::Level::WARN,
            Self::Error | Self::Fatal => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown severity: {0:?}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "FATAL" | "CRITICAL" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns `true` when a message at `message` severity passes a
/// `configured` threshold.
pub fn should_emit(configured: Severity, message: Severity) -> bool {
    message >= configured
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    #[test]
    fn aliases_render_canonical_names() {
        assert_eq!(Severity::WARN.to_string(), "WARNING");
        assert_eq!(Severity::CRITICAL.to_string(), "FATAL");
        assert_eq!(Severity::WARN, Severity::Warning);
        assert_eq!(Severity::CRITICAL, Severity::Fatal);
    }

    #[test]
    fn ordering_follows_ordinal() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn should_emit_compares_against_threshold() {
        for (i, configured) in ALL.iter().enumerate() {
            for (j, message) in ALL.iter().enumerate() {
                assert_eq!(should_emit(*configured, *message), j >= i, "{configured} vs {message}");
            }
        }
    }

    #[test]
    fn parse_accepts_aliases_case_insensitively() {
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Fatal);
        assert_eq!(" info ".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!(
            "trace".parse::<Severity>(),
            Err(ParseSeverityError("trace".to_string()))
        );
    }

    #[test]
    fn fatal_maps_to_tracing_error() {
        assert_eq!(Severity::Fatal.tracing_level(), tracing::Level::ERROR);
        assert_eq!(Severity::WARN.tracing_level(), tracing::Level::WARN);
    }
}
