//! Execution status domain.
//!
//! This module contains:
//! - The closed set of execution states a node can be in
//! - Named, overlapping status groups as compile-time bitsets
//! - The transition tables used to reject illegal status writes
//! - Aggregation of child statuses into one parent status

mod aggregate;
#[cfg(test)]
mod aggregate_tests;
mod groups;
mod set;
mod state;
mod transitions;

pub use aggregate::{aggregate, aggregate_for_node, aggregate_for_plan};
pub use groups::StatusGroup;
pub use set::StatusSet;
pub use state::Status;
pub use transitions::{
    is_valid_transition, node_allowed_predecessors, plan_allowed_predecessors, TransitionPolicy,
};
