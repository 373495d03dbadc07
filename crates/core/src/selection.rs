//! Resolution of the active workflow for the detail panel.

use crate::workflow::Workflow;

/// Pick the workflow to show in detail.
///
/// Returns the workflow whose id equals `selected_id` when it is in
/// `filtered`; otherwise falls back to the first filtered workflow so the
/// panel never goes blank. `None` only when `filtered` is empty.
pub fn resolve_selection<'a>(filtered: &[&'a Workflow], selected_id: Option<&str>) -> Option<&'a Workflow> {
    selected_id
        .and_then(|id| filtered.iter().find(|wf| wf.id == id))
        .or_else(|| filtered.first())
        .copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
