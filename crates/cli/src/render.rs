//! JSON response shapes for the dashboard output.

use serde::Serialize;

use fleetview_core::audit::DataQualityIssue;
use fleetview_core::detail::{success_rate_label, WorkflowDetail};
use fleetview_core::metrics::Summary;
use fleetview_core::time_label::{next_run_label, relative_label};
use fleetview_core::types::{Timestamp, WorkflowId};
use fleetview_core::view::{FleetView, ViewState};
use fleetview_core::workflow::{SlaRisk, Workflow, WorkflowStatus};

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One row of the workflow list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowRow {
    pub id: WorkflowId,
    pub name: String,
    pub client: String,
    pub owner: String,
    pub status: WorkflowStatus,
    pub sla_breach_risk: SlaRisk,
    pub runs_today: u32,
    pub success_rate_label: String,
    pub last_run: String,
    pub next_run: String,
    pub selected: bool,
}

/// Full dashboard output for one derivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardResponse {
    pub generated_at: Timestamp,
    pub state: ViewState,
    pub clients: Vec<String>,
    pub summary: Summary,
    pub workflows: Vec<WorkflowRow>,
    pub selected: Option<WorkflowDetail>,
    pub issues: Vec<DataQualityIssue>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build a list row for `workflow` as seen at `now`.
pub fn workflow_row(workflow: &Workflow, now: Timestamp, selected: bool) -> WorkflowRow {
    WorkflowRow {
        id: workflow.id.clone(),
        name: workflow.name.clone(),
        client: workflow.client.clone(),
        owner: workflow.owner.clone(),
        status: workflow.status,
        sla_breach_risk: workflow.sla_breach_risk,
        runs_today: workflow.runs_today,
        success_rate_label: success_rate_label(workflow.success_rate),
        last_run: relative_label(now, workflow.last_run_at),
        next_run: next_run_label(now, workflow.next_run_at),
        selected,
    }
}

/// Flatten a composed view into the serializable response.
pub fn build_response(
    view: FleetView<'_>,
    state: &ViewState,
    now: Timestamp,
    issues: Vec<DataQualityIssue>,
) -> DashboardResponse {
    let selected_id = view.selected.map(|wf| wf.id.as_str());
    let workflows = view
        .filtered
        .iter()
        .map(|wf| workflow_row(wf, now, Some(wf.id.as_str()) == selected_id))
        .collect();

    DashboardResponse {
        generated_at: now,
        state: state.clone(),
        clients: view.clients,
        summary: view.summary,
        workflows,
        selected: view.selected_detail,
        issues,
    }
}

/// Encode the response as pretty-printed JSON.
pub fn to_pretty_json(response: &DashboardResponse) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(response)?)
}
