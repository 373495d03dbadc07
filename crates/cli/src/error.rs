use std::path::PathBuf;

use fleetview_core::error::CoreError;

/// Application-level error type for the CLI.
///
/// Wraps [`CoreError`] for snapshot contract violations and adds the
/// I/O and configuration failures that only exist outside the core.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fleetview_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience type alias for CLI return values.
pub type AppResult<T> = Result<T, AppError>;
