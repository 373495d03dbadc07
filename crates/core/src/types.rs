/// Workflow identifiers are opaque strings supplied by the snapshot source.
pub type WorkflowId = String;

/// Run identifiers are unique only within their parent workflow.
pub type RunId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
