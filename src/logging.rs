//! Logging setup
//!
//! The terminal owns stdout, so events only ever go to a file, and only when
//! one is configured through `GAPEDIT_LOG_FILE`.
//!
//! Filter priority: `GAPEDIT_LOG` > `RUST_LOG` > `info`.

use crate::settings::Settings;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "info";

/// Returned from [`init`]; hold it until exit so buffered lines get flushed.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

/// Install the file subscriber described by `settings`
///
/// Returns `Ok(None)` when no log file is configured.
pub fn init(
    settings: &Settings,
) -> Result<Option<LogGuard>, Box<dyn std::error::Error + Send + Sync>> {
    let Some(path) = settings.log_file.as_deref() else {
        return Ok(None);
    };
    let (dir, filename) = split_log_path(path);

    std::fs::create_dir_all(&dir)?;
    let file_appender = tracing_appender::rolling::never(&dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_filter(settings.log_filter.as_deref())?);

    Registry::default().with(file_layer).try_init()?;

    Ok(Some(LogGuard {
        _file_guard: file_guard,
        log_file: dir.join(filename),
    }))
}

/// Directory and file name for the appender
fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("gapedit-{}.log", std::process::id()));
    (dir, filename)
}

fn create_filter(
    explicit: Option<&str>,
) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(directives) = explicit {
        return Ok(EnvFilter::try_new(directives)?);
    }
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        return Ok(EnvFilter::try_new(rust_log)?);
    }
    Ok(EnvFilter::new(DEFAULT_FILTER))
}
