//! Fleet view derivation for managed workflows.
//!
//! Pure, side-effect-free logic that turns a workflow snapshot plus filter
//! state into a filtered view set, summary metrics, a selected workflow, and
//! relative time labels. The crate performs no I/O and never reads the
//! system clock; all data and the reference instant are passed in by the
//! caller.

pub mod audit;
pub mod detail;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod selection;
pub mod snapshot;
pub mod time_label;
pub mod types;
pub mod view;
pub mod workflow;

#[cfg(test)]
mod test_support;
