//! Error taxonomy for gapedit
//! Boundary and chord errors are recoverable and end up on the status line;
//! I/O errors are recoverable for save and fatal for the initial load.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Something the user bumped into; editing continues
    Warning,
    /// Operation failed but the editor can continue
    Error,
    /// The editor cannot keep running
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Every failure an editing operation can report.
///
/// The `Display` text doubles as the status-line message.
#[derive(Debug, Error)]
pub enum EditError {
    /// A backward primitive was called with the cursor at offset 0
    #[error("reached beginning of buffer")]
    AtBufferStart,
    /// A forward primitive was called with nothing after the cursor
    #[error("reached end of buffer")]
    AtBufferEnd,
    /// The typed key sequence is not bound to anything
    #[error("{0} is undefined")]
    UndefinedChord(String),
    /// Reading or writing the edited file failed
    #[error("couldn't access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The terminal backend failed
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl EditError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AtBufferStart | Self::AtBufferEnd => ErrorSeverity::Info,
            Self::UndefinedChord(_) => ErrorSeverity::Warning,
            Self::Io { .. } => ErrorSeverity::Error,
            Self::Terminal(_) => ErrorSeverity::Critical,
        }
    }
}

/// Result alias for editing operations
pub type Result<T> = std::result::Result<T, EditError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
