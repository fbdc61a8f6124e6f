//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! The library itself only emits `tracing` events; a binary embedding the
//! agent calls [`init`] once at startup to wire a subscriber. The level
//! defaults to the caller's choice and can be overridden with the
//! `AGENT_LOG` environment variable (e.g. "info", "debug").

use tracing_subscriber::fmt;

/// Environment variable overriding the log level
pub const LOG_LEVEL_KEY: &str = "AGENT_LOG";

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup; calling it a second time panics, as the
/// global subscriber can only be installed once.
pub fn init(default_level: tracing::Level) {
    let level = std::env::var(LOG_LEVEL_KEY)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(default_level);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .init();
}

fn parse_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(tracing::Level::WARN));
        assert_eq!(parse_level("warning"), Some(tracing::Level::WARN));
    }

    #[test]
    fn rejects_unknown_levels() {
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(""), None);
    }
}
