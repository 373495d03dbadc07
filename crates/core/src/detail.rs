//! Detail panel derivation for a single workflow.
//!
//! Turns a workflow plus a reference instant into display-ready labels and
//! a newest-first slice of its run history.

use serde::Serialize;

use crate::time_label::{calendar_label, next_run_label, relative_label};
use crate::types::{RunId, Timestamp, WorkflowId};
use crate::workflow::{RunOutcome, SlaRisk, Workflow, WorkflowStatus};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default number of recent runs shown in the detail panel.
pub const DEFAULT_RECENT_RUNS: usize = 10;

/// Upper bound on recent runs regardless of what the caller asks for.
pub const MAX_RECENT_RUNS: usize = 100;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One row of the recent-runs table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRow {
    pub id: RunId,
    pub timestamp: Timestamp,
    pub relative: String,
    pub calendar: String,
    pub duration_seconds: f64,
    pub errors: u32,
    pub outcome: RunOutcome,
}

/// Everything the detail panel shows for the selected workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowDetail {
    pub id: WorkflowId,
    pub name: String,
    pub client: String,
    pub owner: String,
    pub status: WorkflowStatus,
    pub sla_breach_risk: SlaRisk,
    pub triggers: Vec<String>,
    pub runs_today: u32,
    pub success_rate_label: String,
    pub last_run_relative: String,
    pub last_run_calendar: String,
    pub next_run_relative: String,
    pub next_run_calendar: Option<String>,
    pub clean_runs: usize,
    pub erroring_runs: usize,
    /// Newest first.
    pub recent_runs: Vec<RunRow>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Clamp a requested recent-run count to `0..=MAX_RECENT_RUNS`.
pub fn clamp_recent_limit(limit: usize) -> usize {
    limit.min(MAX_RECENT_RUNS)
}

/// Format a success fraction as a percentage with one decimal place.
///
/// The value is shown as supplied; out-of-range fractions are not clamped.
pub fn success_rate_label(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Build the detail view for `workflow` as seen at `now`.
pub fn describe_workflow(workflow: &Workflow, now: Timestamp, recent_limit: usize) -> WorkflowDetail {
    let limit = clamp_recent_limit(recent_limit);

    let recent_runs = workflow
        .run_history
        .iter()
        .rev()
        .take(limit)
        .map(|run| RunRow {
            id: run.id.clone(),
            timestamp: run.timestamp,
            relative: relative_label(now, run.timestamp),
            calendar: calendar_label(run.timestamp),
            duration_seconds: run.duration_seconds,
            errors: run.errors,
            outcome: run.outcome(),
        })
        .collect();

    let erroring_runs = workflow.erroring_run_count();

    WorkflowDetail {
        id: workflow.id.clone(),
        name: workflow.name.clone(),
        client: workflow.client.clone(),
        owner: workflow.owner.clone(),
        status: workflow.status,
        sla_breach_risk: workflow.sla_breach_risk,
        triggers: workflow.triggers.clone(),
        runs_today: workflow.runs_today,
        success_rate_label: success_rate_label(workflow.success_rate),
        last_run_relative: relative_label(now, workflow.last_run_at),
        last_run_calendar: calendar_label(workflow.last_run_at),
        next_run_relative: next_run_label(now, workflow.next_run_at),
        next_run_calendar: workflow.next_run_at.map(calendar_label),
        clean_runs: workflow.run_history.len() - erroring_runs,
        erroring_runs,
        recent_runs,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
