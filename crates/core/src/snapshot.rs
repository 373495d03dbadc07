//! Snapshot decoding at the fleet boundary.
//!
//! Raw records carry status and risk as strings so contract violations can
//! be reported as [`CoreError::DataIntegrity`] with the offending workflow,
//! instead of a generic deserialization failure.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{RunId, Timestamp, WorkflowId};
use crate::workflow::{Run, SlaRisk, Workflow, WorkflowStatus};

// ---------------------------------------------------------------------------
// Raw records
// ---------------------------------------------------------------------------

/// A run exactly as supplied by the snapshot source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub id: RunId,
    pub timestamp: Timestamp,
    pub duration_seconds: f64,
    pub errors: u32,
}

/// A workflow exactly as supplied by the snapshot source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecord {
    pub id: WorkflowId,
    pub name: String,
    pub client: String,
    pub owner: String,
    pub status: String,
    pub triggers: Vec<String>,
    pub runs_today: u32,
    pub success_rate: f64,
    pub sla_breach_risk: String,
    pub last_run_at: Timestamp,
    #[serde(default)]
    pub next_run_at: Option<Timestamp>,
    #[serde(default)]
    pub run_history: Vec<RunRecord>,
}

impl From<RunRecord> for Run {
    fn from(r: RunRecord) -> Self {
        Run {
            id: r.id,
            timestamp: r.timestamp,
            duration_seconds: r.duration_seconds,
            errors: r.errors,
        }
    }
}

impl TryFrom<WorkflowRecord> for Workflow {
    type Error = CoreError;

    fn try_from(r: WorkflowRecord) -> Result<Self, Self::Error> {
        let status = WorkflowStatus::from_str_value(&r.status)
            .map_err(|msg| CoreError::integrity(&r.id, "status", msg))?;
        let sla_breach_risk = SlaRisk::from_str_value(&r.sla_breach_risk)
            .map_err(|msg| CoreError::integrity(&r.id, "slaBreachRisk", msg))?;

        if r.triggers.is_empty() {
            return Err(CoreError::integrity(&r.id, "triggers", "must not be empty"));
        }

        let mut run_ids = HashSet::new();
        for run in &r.run_history {
            if !run_ids.insert(run.id.as_str()) {
                return Err(CoreError::integrity(
                    &r.id,
                    "runHistory",
                    format!("duplicate run id '{}'", run.id),
                ));
            }
        }

        Ok(Workflow {
            id: r.id,
            name: r.name,
            client: r.client,
            owner: r.owner,
            status,
            triggers: r.triggers,
            runs_today: r.runs_today,
            success_rate: r.success_rate,
            sla_breach_risk,
            last_run_at: r.last_run_at,
            next_run_at: r.next_run_at,
            run_history: r.run_history.into_iter().map(Run::from).collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Convert raw records into workflows, preserving order.
///
/// Fails on the first contract violation, including duplicate workflow ids.
pub fn decode_records(records: Vec<WorkflowRecord>) -> Result<Vec<Workflow>, CoreError> {
    let mut seen = HashSet::new();
    let mut workflows = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id.clone()) {
            return Err(CoreError::integrity(&record.id, "id", "duplicate workflow id"));
        }
        workflows.push(Workflow::try_from(record)?);
    }

    Ok(workflows)
}

/// Parse a JSON snapshot.
///
/// Accepts either a bare array of workflow records or an object with a
/// `workflows` array.
pub fn parse_snapshot(json: &str) -> Result<Vec<Workflow>, CoreError> {
    let document: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CoreError::Validation(format!("Snapshot is not valid JSON: {e}")))?;

    let list = match document {
        serde_json::Value::Array(items) => serde_json::Value::Array(items),
        serde_json::Value::Object(mut obj) => obj.remove("workflows").ok_or_else(|| {
            CoreError::Validation("Snapshot object must contain a 'workflows' array".to_string())
        })?,
        _ => {
            return Err(CoreError::Validation(
                "Snapshot must be an array or an object with a 'workflows' array".to_string(),
            ))
        }
    };

    let records: Vec<WorkflowRecord> = serde_json::from_value(list)
        .map_err(|e| CoreError::Validation(format!("Malformed workflow record: {e}")))?;

    decode_records(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn record(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Invoice sync",
            "client": "acme",
            "owner": "dana",
            "status": "healthy",
            "triggers": ["schedule", "webhook"],
            "runsToday": 6,
            "successRate": 0.98,
            "slaBreachRisk": "low",
            "lastRunAt": "2026-10-17T11:40:00Z",
            "nextRunAt": "2026-10-17T12:40:00Z",
            "runHistory": [
                { "id": "r1", "timestamp": "2026-10-17T10:40:00Z", "durationSeconds": 31.5, "errors": 0 },
                { "id": "r2", "timestamp": "2026-10-17T11:40:00Z", "durationSeconds": 29.0, "errors": 1 }
            ]
        })
    }

    fn parse(value: serde_json::Value) -> Result<Vec<Workflow>, CoreError> {
        parse_snapshot(&value.to_string())
    }

    // -- Accepted shapes --------------------------------------------------

    #[test]
    fn parses_bare_array() {
        let fleet = parse(json!([record("wf-1"), record("wf-2")])).unwrap();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet[0].id, "wf-1");
        assert_eq!(fleet[0].status, WorkflowStatus::Healthy);
        assert_eq!(fleet[0].triggers, vec!["schedule", "webhook"]);
        assert_eq!(fleet[0].run_history[1].errors, 1);
    }

    #[test]
    fn parses_wrapped_object() {
        let fleet = parse(json!({ "workflows": [record("wf-1")] })).unwrap();
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn empty_snapshot_is_not_an_error() {
        assert!(parse(json!([])).unwrap().is_empty());
    }

    #[test]
    fn missing_next_run_means_on_demand() {
        let mut r = record("wf-1");
        r.as_object_mut().unwrap().remove("nextRunAt");
        let fleet = parse(json!([r])).unwrap();
        assert!(fleet[0].is_on_demand());
    }

    #[test]
    fn null_next_run_means_on_demand() {
        let mut r = record("wf-1");
        r["nextRunAt"] = serde_json::Value::Null;
        let fleet = parse(json!([r])).unwrap();
        assert!(fleet[0].next_run_at.is_none());
    }

    #[test]
    fn out_of_range_success_rate_is_kept() {
        let mut r = record("wf-1");
        r["successRate"] = json!(1.4);
        let fleet = parse(json!([r])).unwrap();
        assert_eq!(fleet[0].success_rate, 1.4);
    }

    // -- Integrity violations ---------------------------------------------

    #[test]
    fn unknown_status_is_data_integrity_error() {
        let mut r = record("wf-7");
        r["status"] = json!("degraded");
        assert_matches!(
            parse(json!([r])),
            Err(CoreError::DataIntegrity { workflow_id, field: "status", .. }) if workflow_id == "wf-7"
        );
    }

    #[test]
    fn unknown_sla_risk_is_data_integrity_error() {
        let mut r = record("wf-1");
        r["slaBreachRisk"] = json!("extreme");
        assert_matches!(
            parse(json!([r])),
            Err(CoreError::DataIntegrity { field: "slaBreachRisk", .. })
        );
    }

    #[test]
    fn empty_triggers_rejected() {
        let mut r = record("wf-1");
        r["triggers"] = json!([]);
        assert_matches!(
            parse(json!([r])),
            Err(CoreError::DataIntegrity { field: "triggers", .. })
        );
    }

    #[test]
    fn duplicate_workflow_ids_rejected() {
        assert_matches!(
            parse(json!([record("wf-1"), record("wf-1")])),
            Err(CoreError::DataIntegrity { field: "id", .. })
        );
    }

    #[test]
    fn duplicate_run_ids_rejected() {
        let mut r = record("wf-1");
        r["runHistory"][1]["id"] = json!("r1");
        assert_matches!(
            parse(json!([r])),
            Err(CoreError::DataIntegrity { field: "runHistory", .. })
        );
    }

    // -- Malformed input --------------------------------------------------

    #[test]
    fn negative_error_count_is_malformed() {
        let mut r = record("wf-1");
        r["runHistory"][0]["errors"] = json!(-1);
        assert_matches!(parse(json!([r])), Err(CoreError::Validation(_)));
    }

    #[test]
    fn invalid_json_is_validation_error() {
        assert_matches!(parse_snapshot("{not json"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert_matches!(parse_snapshot("42"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn object_without_workflows_is_rejected() {
        assert_matches!(parse(json!({ "items": [] })), Err(CoreError::Validation(_)));
    }
}
