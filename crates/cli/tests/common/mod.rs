use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::json;
use tempfile::NamedTempFile;

use fleetview_cli::config::CliConfig;

/// Fixed reference instant for rendered labels.
pub fn test_now() -> DateTime<Utc> {
    "2026-10-17T12:00:00Z".parse().unwrap()
}

/// A three-workflow fleet across two clients, one of them on demand and one
/// with an out-of-range success rate.
pub fn fleet_json() -> serde_json::Value {
    json!({
        "workflows": [
            {
                "id": "wf-billing",
                "name": "acme-sync",
                "client": "Acme",
                "owner": "dana",
                "status": "healthy",
                "triggers": ["schedule"],
                "runsToday": 8,
                "successRate": 0.95,
                "slaBreachRisk": "low",
                "lastRunAt": "2026-10-17T11:45:00Z",
                "nextRunAt": "2026-10-17T12:15:00Z",
                "runHistory": [
                    { "id": "r1", "timestamp": "2026-10-17T09:00:00Z", "durationSeconds": 12, "errors": 0 },
                    { "id": "r2", "timestamp": "2026-10-17T11:45:00Z", "durationSeconds": 18, "errors": 1 }
                ]
            },
            {
                "id": "wf-ledger",
                "name": "Ledger close",
                "client": "Acme",
                "owner": "li",
                "status": "failed",
                "triggers": ["webhook"],
                "runsToday": 2,
                "successRate": 1.3,
                "slaBreachRisk": "high",
                "lastRunAt": "2026-10-16T12:00:00Z",
                "runHistory": []
            },
            {
                "id": "wf-leads",
                "name": "Lead import",
                "client": "Globex",
                "owner": "sam",
                "status": "warning",
                "triggers": ["schedule", "webhook"],
                "runsToday": 5,
                "successRate": 0.6,
                "slaBreachRisk": "medium",
                "lastRunAt": "2026-10-17T10:00:00Z",
                "nextRunAt": "2026-10-18T10:00:00Z",
                "runHistory": [
                    { "id": "r1", "timestamp": "2026-10-17T10:00:00Z", "durationSeconds": 30, "errors": 0 }
                ]
            }
        ]
    })
}

/// Write `value` to a temporary snapshot file.
pub fn write_snapshot(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Config pointing at `path` with no filters and the fixed test clock.
pub fn test_config(path: &Path) -> CliConfig {
    CliConfig {
        snapshot_path: path.to_path_buf(),
        client: "all".to_string(),
        status: "all".to_string(),
        search: String::new(),
        selected_id: None,
        now: Some(test_now()),
        recent_runs: 10,
    }
}
