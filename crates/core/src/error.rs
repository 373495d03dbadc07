use crate::types::WorkflowId;

/// Errors raised while accepting a fleet snapshot.
///
/// The derivation pipeline itself never fails; every variant here belongs to
/// boundary decoding of externally supplied records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A record violates the workflow data contract (unknown status, unknown
    /// SLA risk, empty trigger list, duplicate identifier).
    #[error("Data integrity violation in workflow {workflow_id}: {field} {reason}")]
    DataIntegrity {
        workflow_id: WorkflowId,
        field: &'static str,
        reason: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for building a [`CoreError::DataIntegrity`].
    pub fn integrity(workflow_id: &str, field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::DataIntegrity {
            workflow_id: workflow_id.to_string(),
            field,
            reason: reason.into(),
        }
    }
}
