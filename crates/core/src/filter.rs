//! Client / status / search filtering over a fleet snapshot.
//!
//! Filtering is stable: the view set keeps the fleet's order and borrows
//! from it.

use serde::{Deserialize, Serialize};

use crate::workflow::{Workflow, WorkflowStatus};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Parameter value meaning "no constraint" for client and status filters.
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Filter parameters
// ---------------------------------------------------------------------------

/// Constraint on the owning client. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientFilter {
    #[default]
    All,
    Client(String),
}

impl ClientFilter {
    /// Parse a selector value; `"all"` means no constraint.
    pub fn from_param(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Client(value.to_string())
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Client(c) => c,
        }
    }

    pub fn matches(&self, workflow: &Workflow) -> bool {
        match self {
            Self::All => true,
            Self::Client(c) => workflow.client == *c,
        }
    }
}

/// Constraint on workflow status.
///
/// `Unrecognized` keeps a parameter value outside the status enum; it is not
/// an error and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(WorkflowStatus),
    Unrecognized(String),
}

impl StatusFilter {
    /// Parse a selector value; `"all"` means no constraint.
    pub fn from_param(value: &str) -> Self {
        if value == ALL {
            return Self::All;
        }
        match WorkflowStatus::from_str_value(value) {
            Ok(status) => Self::Only(status),
            Err(_) => Self::Unrecognized(value.to_string()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(status) => status.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn matches(&self, workflow: &Workflow) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => workflow.status == *status,
            Self::Unrecognized(_) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Locale-independent simple case folding (per-character lowercase).
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Search term folded once so it can be matched against many workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    folded: String,
}

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self {
            folded: fold_case(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Substring match against the workflow's name or client.
    pub fn matches(&self, workflow: &Workflow) -> bool {
        self.is_empty()
            || fold_case(&workflow.name).contains(&self.folded)
            || fold_case(&workflow.client).contains(&self.folded)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the workflows matching every constraint, in fleet order.
pub fn filter_workflows<'a>(
    workflows: &'a [Workflow],
    client_filter: &ClientFilter,
    status_filter: &StatusFilter,
    search_term: &str,
) -> Vec<&'a Workflow> {
    let search = SearchTerm::new(search_term);
    workflows
        .iter()
        .filter(|wf| client_filter.matches(wf) && status_filter.matches(wf) && search.matches(wf))
        .collect()
}

/// Client selector options: `"all"` first, then each distinct client in
/// order of first appearance.
///
/// A client literally named `"all"` is folded into the leading entry.
pub fn client_options(workflows: &[Workflow]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for wf in workflows {
        if !options.iter().any(|c| *c == wf.client) {
            options.push(wf.client.clone());
        }
    }
    options
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
