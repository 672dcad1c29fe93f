//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::{data_dir, expand_tilde};
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name used when no `trace_file` is configured.
pub const DEFAULT_TRACE_FILE: &str = "food-deals-trace.json";

/// Initializes the tracing subscriber with a rotating JSON log file.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by the configured trace level
/// 2. Formats each event as one JSON object, including the span stack
/// 3. Appends it to a size-rotated file
///
/// # Trace Level Resolution
///
/// `config.trace_level` if set, else `"info"`. The value is any `EnvFilter`
/// directive, so `food_deals::query=trace,info` works.
///
/// # File Location
///
/// `config.trace_file` (with `~` expanded) if set, else
/// `<data dir>/food-deals-trace.json`.
///
/// # Initialization Behavior
///
/// - Creates the parent directory if it doesn't exist
/// - Silently skips tracing if that fails or the level is unparseable
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust,no_run
/// use food_deals::observability::init_tracing;
/// use food_deals::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let Ok(filter) = EnvFilter::try_new(level) else {
        return;
    };

    let trace_file = trace_file_path(config);
    if let Some(parent) = trace_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_target(true)
        .with_ansi(false)
        .with_writer(FileWriter::new(trace_file));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .try_init();
}

/// Resolves where trace output goes for `config`.
#[must_use]
pub fn trace_file_path(config: &Config) -> PathBuf {
    config.trace_file.as_deref().map_or_else(
        || data_dir().join(DEFAULT_TRACE_FILE),
        |path| PathBuf::from(expand_tilde(path)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_trace_file_wins() {
        let config = Config {
            trace_file: Some("/var/log/deals.json".to_string()),
            ..Config::default()
        };
        assert_eq!(trace_file_path(&config), PathBuf::from("/var/log/deals.json"));
    }

    #[test]
    fn default_trace_file_lives_in_data_dir() {
        let path = trace_file_path(&Config::default());
        assert!(path.ends_with(DEFAULT_TRACE_FILE));
        assert_eq!(path.parent(), Some(data_dir().as_path()));
    }
}
