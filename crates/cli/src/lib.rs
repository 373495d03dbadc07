//! Operator CLI for the workflow fleet view.
//!
//! Loads a snapshot from disk, applies the configured filters, and renders
//! the derived dashboard as JSON.

pub mod config;
pub mod error;
pub mod render;
pub mod snapshot;

use fleetview_core::types::Timestamp;
use fleetview_core::view::{compose_with_recent_limit, ViewState};
use fleetview_core::workflow::Workflow;

use crate::config::CliConfig;
use crate::error::AppResult;
use crate::render::{build_response, DashboardResponse};
use crate::snapshot::load_snapshot;

/// Build the view state the configuration asks for.
///
/// Without an explicit selection, the first workflow of the fleet is
/// selected, as on a fresh session.
pub fn initial_state(config: &CliConfig, fleet: &[Workflow]) -> ViewState {
    let selected = config
        .selected_id
        .clone()
        .or_else(|| ViewState::initial(fleet).selected_id);
    ViewState::from_params(&config.client, &config.status, &config.search, selected.as_deref())
}

/// Load the configured snapshot and derive the dashboard at `now`.
pub fn run(config: &CliConfig, now: Timestamp) -> AppResult<DashboardResponse> {
    let loaded = load_snapshot(&config.snapshot_path)?;
    let state = initial_state(config, &loaded.workflows);
    tracing::debug!(?state, "Resolved view state");

    let view = compose_with_recent_limit(&loaded.workflows, &state, now, config.recent_runs);
    tracing::info!(
        visible = view.filtered.len(),
        total = loaded.workflows.len(),
        selected = view.selected.map(|wf| wf.id.as_str()).unwrap_or("-"),
        "Composed fleet view"
    );

    Ok(build_response(view, &state, now, loaded.issues))
}
