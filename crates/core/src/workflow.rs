//! Workflow and run data model.
//!
//! Workflows are immutable once decoded from a snapshot; nothing in this
//! crate mutates them. Decoding and contract checks live in
//! [`crate::snapshot`].

use serde::{Deserialize, Serialize};

use crate::types::{RunId, Timestamp, WorkflowId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_HEALTHY: &str = "healthy";
pub const STATUS_WARNING: &str = "warning";
pub const STATUS_FAILED: &str = "failed";
pub const STATUS_PAUSED: &str = "paused";

/// All valid workflow status strings.
pub const VALID_STATUSES: &[&str] = &[STATUS_HEALTHY, STATUS_WARNING, STATUS_FAILED, STATUS_PAUSED];

pub const RISK_LOW: &str = "low";
pub const RISK_MEDIUM: &str = "medium";
pub const RISK_HIGH: &str = "high";

/// All valid SLA breach risk strings.
pub const VALID_SLA_RISKS: &[&str] = &[RISK_LOW, RISK_MEDIUM, RISK_HIGH];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Health status of a workflow. Exhaustive and mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Healthy,
    Warning,
    Failed,
    Paused,
}

impl WorkflowStatus {
    /// Parse a status string. Unknown values are rejected, never coerced.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_HEALTHY => Ok(Self::Healthy),
            STATUS_WARNING => Ok(Self::Warning),
            STATUS_FAILED => Ok(Self::Failed),
            STATUS_PAUSED => Ok(Self::Paused),
            _ => Err(format!(
                "Invalid status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => STATUS_HEALTHY,
            Self::Warning => STATUS_WARNING,
            Self::Failed => STATUS_FAILED,
            Self::Paused => STATUS_PAUSED,
        }
    }
}

/// Coarse risk of missing a service-level target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaRisk {
    Low,
    Medium,
    High,
}

impl SlaRisk {
    /// Parse an SLA risk string. Unknown values are rejected.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            RISK_LOW => Ok(Self::Low),
            RISK_MEDIUM => Ok(Self::Medium),
            RISK_HIGH => Ok(Self::High),
            _ => Err(format!(
                "Invalid SLA breach risk '{s}'. Must be one of: {}",
                VALID_SLA_RISKS.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => RISK_LOW,
            Self::Medium => RISK_MEDIUM,
            Self::High => RISK_HIGH,
        }
    }
}

/// Outcome of a single run, derived from its error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Clean,
    Erroring,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One historical execution of a workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub id: RunId,
    pub timestamp: Timestamp,
    pub duration_seconds: f64,
    pub errors: u32,
}

impl Run {
    /// A run is clean iff it reported zero errors.
    pub fn outcome(&self) -> RunOutcome {
        if self.errors == 0 {
            RunOutcome::Clean
        } else {
            RunOutcome::Erroring
        }
    }

    pub fn is_clean(&self) -> bool {
        self.outcome() == RunOutcome::Clean
    }
}

/// A managed automation definition with observed run statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workflow {
    pub id: WorkflowId,
    pub name: String,
    pub client: String,
    pub owner: String,
    pub status: WorkflowStatus,
    /// Never empty; order is kept for display only.
    pub triggers: Vec<String>,
    pub runs_today: u32,
    /// Nominally in `[0, 1]`. Out-of-range values are kept as supplied.
    pub success_rate: f64,
    pub sla_breach_risk: SlaRisk,
    pub last_run_at: Timestamp,
    /// `None` means the workflow only runs on demand.
    pub next_run_at: Option<Timestamp>,
    /// Chronological, oldest first.
    pub run_history: Vec<Run>,
}

impl Workflow {
    /// Whether the workflow has a schedule at all.
    pub fn is_on_demand(&self) -> bool {
        self.next_run_at.is_none()
    }

    /// Number of runs in the history that reported errors.
    pub fn erroring_run_count(&self) -> usize {
        self.run_history.iter().filter(|r| !r.is_clean()).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn run(errors: u32) -> Run {
        Run {
            id: format!("r-{errors}"),
            timestamp: chrono::Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap(),
            duration_seconds: 12.0,
            errors,
        }
    }

    // -- WorkflowStatus ---------------------------------------------------

    #[test]
    fn status_parses_every_valid_value() {
        for s in VALID_STATUSES {
            let parsed = WorkflowStatus::from_str_value(s).unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
    }

    #[test]
    fn status_rejects_unknown_value() {
        let err = WorkflowStatus::from_str_value("degraded").unwrap_err();
        assert!(err.contains("degraded"));
    }

    #[test]
    fn status_parsing_is_case_sensitive() {
        assert!(WorkflowStatus::from_str_value("Healthy").is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&WorkflowStatus::Paused).unwrap();
        assert_eq!(json, "\"paused\"");
    }

    // -- SlaRisk ----------------------------------------------------------

    #[test]
    fn sla_risk_round_trips_through_str() {
        for s in VALID_SLA_RISKS {
            assert_eq!(SlaRisk::from_str_value(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn sla_risk_rejects_unknown_value() {
        assert!(SlaRisk::from_str_value("critical").is_err());
    }

    // -- Run outcome ------------------------------------------------------

    #[test]
    fn zero_errors_is_clean() {
        assert_eq!(run(0).outcome(), RunOutcome::Clean);
        assert!(run(0).is_clean());
    }

    #[test]
    fn any_error_is_erroring() {
        assert_eq!(run(1).outcome(), RunOutcome::Erroring);
        assert_eq!(run(7).outcome(), RunOutcome::Erroring);
    }
}
