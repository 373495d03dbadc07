//! View composition: filter state in, render-ready view out.
//!
//! [`ViewState`] is the only mutable state in the pipeline and is owned by
//! the caller. [`compose`] runs filter, summary and selection against one
//! snapshot and one state value, so its outputs are always consistent with
//! each other.

use serde::{Deserialize, Serialize};

use crate::detail::{describe_workflow, WorkflowDetail, DEFAULT_RECENT_RUNS};
use crate::filter::{client_options, filter_workflows, ClientFilter, StatusFilter};
use crate::metrics::{summarize, Summary};
use crate::selection::resolve_selection;
use crate::types::{Timestamp, WorkflowId};
use crate::workflow::Workflow;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// User-selected filters plus the selected workflow id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub client: ClientFilter,
    pub status: StatusFilter,
    pub search: String,
    /// May name a workflow that is filtered out or does not exist.
    pub selected_id: Option<WorkflowId>,
}

/// A discrete user action. Each action changes exactly one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ViewAction {
    SetClient(ClientFilter),
    SetStatus(StatusFilter),
    SetSearch(String),
    Select(WorkflowId),
}

impl ViewState {
    /// Defaults for a fresh session: no filters, first workflow selected.
    pub fn initial(fleet: &[Workflow]) -> Self {
        Self {
            selected_id: fleet.first().map(|wf| wf.id.clone()),
            ..Self::default()
        }
    }

    /// Build a state from raw selector parameters.
    pub fn from_params(client: &str, status: &str, search: &str, selected_id: Option<&str>) -> Self {
        Self {
            client: ClientFilter::from_param(client),
            status: StatusFilter::from_param(status),
            search: search.to_string(),
            selected_id: selected_id.map(str::to_string),
        }
    }

    /// Apply one action. Filter changes keep the selected id.
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SetClient(client) => self.client = client,
            ViewAction::SetStatus(status) => self.status = status,
            ViewAction::SetSearch(search) => self.search = search,
            ViewAction::Select(id) => self.selected_id = Some(id),
        }
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Render-ready derivation of one snapshot under one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetView<'a> {
    /// View set, in fleet order.
    pub filtered: Vec<&'a Workflow>,
    /// Summary over the view set.
    pub summary: Summary,
    pub selected: Option<&'a Workflow>,
    /// Detail panel for `selected`.
    pub selected_detail: Option<WorkflowDetail>,
    /// Client selector options over the whole fleet.
    pub clients: Vec<String>,
}

/// Derive the view with the default number of recent runs.
pub fn compose<'a>(fleet: &'a [Workflow], state: &ViewState, now: Timestamp) -> FleetView<'a> {
    compose_with_recent_limit(fleet, state, now, DEFAULT_RECENT_RUNS)
}

/// Derive the view: filter, then summarize the view set, then resolve the
/// selection against it.
pub fn compose_with_recent_limit<'a>(
    fleet: &'a [Workflow],
    state: &ViewState,
    now: Timestamp,
    recent_limit: usize,
) -> FleetView<'a> {
    let filtered = filter_workflows(fleet, &state.client, &state.status, &state.search);
    let summary = summarize(filtered.iter().copied());
    let selected = resolve_selection(&filtered, state.selected_id.as_deref());
    let selected_detail = selected.map(|wf| describe_workflow(wf, now, recent_limit));

    FleetView {
        filtered,
        summary,
        selected,
        selected_detail,
        clients: client_options(fleet),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
