//! Fleet-wide summary metrics.
//!
//! The aggregator knows nothing about filters: callers pass the set they
//! want summarized (normally the current view set).

use serde::Serialize;

use crate::workflow::{SlaRisk, Workflow, WorkflowStatus};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Summary statistics over a set of workflows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_workflows: usize,
    pub healthy: usize,
    pub warning: usize,
    pub failed: usize,
    pub paused: usize,
    /// Workflows whose SLA breach risk is `high`.
    pub high_risk: usize,
    pub total_runs_today: u64,
    /// Runs across every workflow's history, flattened.
    pub total_runs: usize,
    pub erroring_runs: usize,
    /// Mean `success_rate`; `0.0` for an empty set.
    pub avg_success_rate: f64,
    /// Mean run duration over all runs; `0.0` when there are no runs.
    pub average_duration_seconds: f64,
}

impl Summary {
    /// Count for a single status bucket.
    pub fn count_for(&self, status: WorkflowStatus) -> usize {
        match status {
            WorkflowStatus::Healthy => self.healthy,
            WorkflowStatus::Warning => self.warning,
            WorkflowStatus::Failed => self.failed,
            WorkflowStatus::Paused => self.paused,
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Sum samples in a canonical order so the result does not depend on the
/// order they were collected in.
fn canonical_sum(mut samples: Vec<f64>) -> f64 {
    samples.sort_by(f64::total_cmp);
    samples.into_iter().sum()
}

/// Mean of `samples`, or `0.0` when there are none.
fn mean(samples: Vec<f64>) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let n = samples.len() as f64;
    canonical_sum(samples) / n
}

/// Reduce `workflows` into a [`Summary`].
///
/// Any permutation of the input produces an identical summary. Success
/// rates are averaged as supplied, without clamping.
pub fn summarize<'a, I>(workflows: I) -> Summary
where
    I: IntoIterator<Item = &'a Workflow>,
{
    let mut summary = Summary::default();
    let mut success_rates = Vec::new();
    let mut durations = Vec::new();

    for wf in workflows {
        summary.total_workflows += 1;
        match wf.status {
            WorkflowStatus::Healthy => summary.healthy += 1,
            WorkflowStatus::Warning => summary.warning += 1,
            WorkflowStatus::Failed => summary.failed += 1,
            WorkflowStatus::Paused => summary.paused += 1,
        }
        if wf.sla_breach_risk == SlaRisk::High {
            summary.high_risk += 1;
        }
        summary.total_runs_today += u64::from(wf.runs_today);
        success_rates.push(wf.success_rate);

        for run in &wf.run_history {
            summary.total_runs += 1;
            if !run.is_clean() {
                summary.erroring_runs += 1;
            }
            durations.push(run.duration_seconds);
        }
    }

    summary.avg_success_rate = mean(success_rates);
    summary.average_duration_seconds = mean(durations);
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
