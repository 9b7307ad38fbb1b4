//! Error types for TalentScout.
//!
//! Library crates use [`TalentScoutError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all TalentScout operations.
#[derive(Debug, thiserror::Error)]
pub enum TalentScoutError {
    /// Configuration loading or validation error (including an empty
    /// credential pool). Fatal, never retried.
    #[error("config error: {message}")]
    Config { message: String },

    /// HTTP 401, or a 403 not caused by quota exhaustion. Fatal for the
    /// current fetch; aborts aggregation.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Any other non-200 status or network-level failure. Non-fatal at page
    /// granularity during aggregation.
    #[error("upstream error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// The quota reset is further away than the configured backoff budget.
    #[error("rate limited: quota resets in {wait_secs}s, over the backoff budget")]
    RateLimited { wait_secs: u64 },

    /// No candidates were found for the search. A normal, expected outcome —
    /// callers must distinguish it from an empty filtered view.
    #[error("no profiles found")]
    NoResults,

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Tabular/CSV export error.
    #[error("export error: {0}")]
    Export(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TalentScoutError>;

impl TalentScoutError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an upstream error with an optional HTTP status.
    pub fn upstream(status: Option<u16>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
