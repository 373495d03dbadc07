//! Data-quality audit for decoded snapshots.
//!
//! Out-of-range values are never rejected or clamped; they flow into the
//! summary unchanged. This module only reports them so the caller can
//! surface them.

use serde::Serialize;

use crate::types::{RunId, WorkflowId};
use crate::workflow::Workflow;

/// Kind of data-quality problem found on a workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// `success_rate` outside `[0, 1]` or not finite.
    SuccessRateOutOfRange { value: f64 },
    /// A run reported a negative or non-finite duration.
    InvalidRunDuration { run_id: RunId, value: f64 },
    /// A run is older than the run before it.
    HistoryOutOfOrder { run_id: RunId },
}

/// A single data-quality finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQualityIssue {
    pub workflow_id: WorkflowId,
    #[serde(flatten)]
    pub kind: IssueKind,
}

/// Whether `value` is a usable success fraction.
pub fn is_valid_success_rate(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// Collect data-quality issues across the fleet, in fleet order.
pub fn audit_workflows(workflows: &[Workflow]) -> Vec<DataQualityIssue> {
    let mut issues = Vec::new();

    for wf in workflows {
        let mut push = |kind: IssueKind| {
            issues.push(DataQualityIssue {
                workflow_id: wf.id.clone(),
                kind,
            })
        };

        if !is_valid_success_rate(wf.success_rate) {
            push(IssueKind::SuccessRateOutOfRange {
                value: wf.success_rate,
            });
        }

        for run in &wf.run_history {
            if !run.duration_seconds.is_finite() || run.duration_seconds < 0.0 {
                push(IssueKind::InvalidRunDuration {
                    run_id: run.id.clone(),
                    value: run.duration_seconds,
                });
            }
        }

        for pair in wf.run_history.windows(2) {
            if pair[1].timestamp < pair[0].timestamp {
                push(IssueKind::HistoryOutOfOrder {
                    run_id: pair[1].id.clone(),
                });
            }
        }
    }

    issues
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
