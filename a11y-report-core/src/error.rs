//! Error types for the accessibility report engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for report generation.
///
/// Every variant is fatal to a run; the generator turns it into an error
/// report instead of propagating it to the caller.
#[derive(Debug, Error)]
pub enum A11yReportError {
    /// The diagnostic source (or a catalog extension) could not be read.
    #[error("cannot read {}: {source}", path.display())]
    InputUnavailable {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The diagnostic source does not match the expected shape.
    #[error("malformed input {}: {message}", path.display())]
    InputMalformed {
        /// Path whose contents were rejected.
        path: PathBuf,
        /// Parser message describing the mismatch.
        message: String,
    },
    /// An I/O error outside input loading (for example writing the report).
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl A11yReportError {
    /// Build an [`A11yReportError::InputUnavailable`] for `path`.
    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Build an [`A11yReportError::InputMalformed`] for `path`.
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InputMalformed {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience result type for the report engine.
pub type Result<T> = std::result::Result<T, A11yReportError>;
