//! Key rewriting applied to every line at the output boundary.

use once_cell::sync::Lazy;
use regex::bytes::{self, NoExpand};
use regex::{Captures, Regex};
use std::borrow::Cow;

const KEY_TOKEN_PATTERN: &str = r#""[a-zA-Z0-9]*":"#;
const COLLAPSED_LOG_LEVEL: &str = r#""loglevel":"#;
const LOG_LEVEL: &str = r#""log_level":"#;

/// A quoted alphanumeric JSON key immediately followed by a colon.
static KEY_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(KEY_TOKEN_PATTERN).unwrap());

static KEY_TOKEN_BYTES: Lazy<bytes::Regex> =
    Lazy::new(|| bytes::Regex::new(KEY_TOKEN_PATTERN).unwrap());
static COLLAPSED_LOG_LEVEL_BYTES: Lazy<bytes::Regex> =
    Lazy::new(|| bytes::Regex::new(&regex::escape(COLLAPSED_LOG_LEVEL)).unwrap());

/// Lowercase every key token, then rename `"loglevel":` to
/// `"log_level":`.
///
/// The passes are order dependent: `"LogLevel":` only becomes
/// `"log_level":` because the first pass collapses it to `"loglevel":`.
/// Keys at any nesting depth are covered by the same scan.
pub fn normalize_keys(line: &str) -> String {
    let lowered = lowercase_keys(line);
    lowered.replace(COLLAPSED_LOG_LEVEL, LOG_LEVEL)
}

/// Byte-level [`normalize_keys`]. Bytes outside key tokens, including
/// invalid UTF-8, are copied through unchanged.
pub fn normalize_key_bytes(line: &[u8]) -> Vec<u8> {
    let lowered = KEY_TOKEN_BYTES.replace_all(line, |caps: &bytes::Captures| {
        caps[0].to_ascii_lowercase()
    });
    COLLAPSED_LOG_LEVEL_BYTES
        .replace_all(&lowered, NoExpand(LOG_LEVEL.as_bytes()))
        .into_owned()
}

fn lowercase_keys(line: &str) -> Cow<'_, str> {
    KEY_TOKEN.replace_all(line, |caps: &Captures| caps[0].to_ascii_lowercase())
}
