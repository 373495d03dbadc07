//! Fixture builders shared by unit tests.

use chrono::{Duration, TimeZone, Utc};

use crate::types::Timestamp;
use crate::workflow::{Run, SlaRisk, Workflow, WorkflowStatus};

/// Fixed reference instant used across unit tests.
pub(crate) fn base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
}

/// A healthy, scheduled workflow with an empty run history.
pub(crate) fn workflow(id: &str, name: &str, client: &str, status: WorkflowStatus) -> Workflow {
    Workflow {
        id: id.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        owner: "ops".to_string(),
        status,
        triggers: vec!["schedule".to_string()],
        runs_today: 0,
        success_rate: 1.0,
        sla_breach_risk: SlaRisk::Low,
        last_run_at: base_time() - Duration::minutes(5),
        next_run_at: Some(base_time() + Duration::minutes(55)),
        run_history: Vec::new(),
    }
}

/// A run `minutes_ago` minutes before [`base_time`].
pub(crate) fn run(id: &str, minutes_ago: i64, duration_seconds: f64, errors: u32) -> Run {
    Run {
        id: id.to_string(),
        timestamp: base_time() - Duration::minutes(minutes_ago),
        duration_seconds,
        errors,
    }
}
