use std::path::Path;

use fleetview_core::audit::{audit_workflows, DataQualityIssue};
use fleetview_core::snapshot::parse_snapshot;
use fleetview_core::workflow::Workflow;

use crate::error::{AppError, AppResult};

/// A decoded snapshot together with the data-quality findings on it.
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub workflows: Vec<Workflow>,
    pub issues: Vec<DataQualityIssue>,
}

/// Read, decode and audit a snapshot file.
///
/// Contract violations abort the load; data-quality issues are logged and
/// returned alongside the workflows.
pub fn load_snapshot(path: &Path) -> AppResult<LoadedSnapshot> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let workflows = parse_snapshot(&raw).inspect_err(|err| {
        tracing::error!(path = %path.display(), error = %err, "Rejected snapshot");
    })?;
    tracing::info!(path = %path.display(), workflows = workflows.len(), "Loaded snapshot");

    let issues = audit_workflows(&workflows);
    for issue in &issues {
        tracing::warn!(workflow_id = %issue.workflow_id, issue = ?issue.kind, "Data quality issue");
    }

    Ok(LoadedSnapshot { workflows, issues })
}
