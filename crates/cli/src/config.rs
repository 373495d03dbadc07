use std::path::PathBuf;

use chrono::{DateTime, Utc};
use fleetview_core::detail::{clamp_recent_limit, DEFAULT_RECENT_RUNS};
use fleetview_core::filter::ALL;
use fleetview_core::types::Timestamp;

use crate::error::{AppError, AppResult};

/// CLI configuration loaded from environment variables.
///
/// Everything except the snapshot path has a default, so a bare
/// `FLEETVIEW_SNAPSHOT=fleet.json fleetview` shows the whole fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// JSON snapshot to load.
    pub snapshot_path: PathBuf,
    /// Client selector value (default: `all`).
    pub client: String,
    /// Status selector value (default: `all`).
    pub status: String,
    /// Search text (default: empty).
    pub search: String,
    /// Selected workflow id. When unset, the first workflow is selected.
    pub selected_id: Option<String>,
    /// Reference instant for relative labels. When unset, the system clock
    /// is read once at startup.
    pub now: Option<Timestamp>,
    /// Number of recent runs in the detail panel (default: `10`).
    pub recent_runs: usize,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default  |
    /// |-------------------------|----------|
    /// | `FLEETVIEW_SNAPSHOT`    | required |
    /// | `FLEETVIEW_CLIENT`      | `all`    |
    /// | `FLEETVIEW_STATUS`      | `all`    |
    /// | `FLEETVIEW_SEARCH`      | empty    |
    /// | `FLEETVIEW_SELECTED`    | unset    |
    /// | `FLEETVIEW_NOW`         | unset    |
    /// | `FLEETVIEW_RECENT_RUNS` | `10`     |
    ///
    /// `snapshot_arg` (the first CLI argument) overrides `FLEETVIEW_SNAPSHOT`.
    pub fn from_env(snapshot_arg: Option<String>) -> AppResult<Self> {
        Self::from_lookup(snapshot_arg, |key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(snapshot_arg: Option<String>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot_path = snapshot_arg
            .or_else(|| lookup("FLEETVIEW_SNAPSHOT"))
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                AppError::Config(
                    "FLEETVIEW_SNAPSHOT must be set (or pass the snapshot path as an argument)"
                        .to_string(),
                )
            })?;

        let client = lookup("FLEETVIEW_CLIENT").unwrap_or_else(|| ALL.into());
        let status = lookup("FLEETVIEW_STATUS").unwrap_or_else(|| ALL.into());
        let search = lookup("FLEETVIEW_SEARCH").unwrap_or_default();
        let selected_id = lookup("FLEETVIEW_SELECTED").filter(|s| !s.is_empty());

        let now = lookup("FLEETVIEW_NOW")
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| {
                        AppError::Config(format!("FLEETVIEW_NOW must be an RFC 3339 timestamp: {e}"))
                    })
            })
            .transpose()?;

        let recent_runs = match lookup("FLEETVIEW_RECENT_RUNS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::Config(format!(
                    "FLEETVIEW_RECENT_RUNS must be a non-negative integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_RECENT_RUNS,
        };

        Ok(Self {
            snapshot_path,
            client,
            status,
            search,
            selected_id,
            now,
            recent_runs: clamp_recent_limit(recent_runs),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
