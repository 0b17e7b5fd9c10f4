//! Runtime settings
//! Defaults come from `constants`; each can be overridden from the environment.

use crate::constants::{buffer, env, input};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Knobs read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How long the main loop waits for a key before redrawing
    pub poll_interval: Duration,
    /// Storage size of the buffer for a new file
    pub default_capacity: usize,
    /// Log destination; logging is off when unset
    pub log_file: Option<PathBuf>,
    /// Filter directive taking precedence over `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            poll_interval: Duration::from_millis(input::POLL_INTERVAL_MS),
            default_capacity: buffer::DEFAULT_CAPACITY,
            log_file: None,
            log_filter: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(ms) = parse_var::<u64>(&lookup, env::POLL_MS) {
            settings.poll_interval = Duration::from_millis(ms);
        }
        if let Some(capacity) = parse_var::<usize>(&lookup, env::CAPACITY) {
            settings.default_capacity = capacity;
        }
        settings.log_file = lookup(env::LOG_FILE)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        settings.log_filter = lookup(env::LOG_FILTER).filter(|v| !v.is_empty());

        settings
    }
}

fn parse_var<V: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<V> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring malformed setting");
            None
        }
    }
}
