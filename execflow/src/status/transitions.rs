//! Status transition tables.
//!
//! Given a target status, the tables return the statuses a node may legally
//! be in immediately before moving to it. The node table matches on every
//! [`Status`] without a wildcard, so adding a status fails the build until
//! its predecessors are declared.

use super::{Status, StatusSet};
use serde::{Deserialize, Serialize};

/// Which transition table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Rules for a single node (step, stage, ...).
    #[default]
    Node,
    /// Rules for the whole plan execution.
    Plan,
}

impl TransitionPolicy {
    /// Returns the statuses that may precede `to` under this policy.
    #[must_use]
    pub const fn allowed_predecessors(self, to: Status) -> StatusSet {
        match self {
            Self::Node => node_allowed_predecessors(to),
            Self::Plan => plan_allowed_predecessors(to),
        }
    }
}

/// Returns the statuses a node may be in immediately before moving to `to`.
#[must_use]
pub const fn node_allowed_predecessors(to: Status) -> StatusSet {
    match to {
        Status::Running => StatusSet::of(&[
            Status::Queued,
            Status::AsyncWaiting,
            Status::ApprovalWaiting,
            Status::ResourceWaiting,
            Status::TaskWaiting,
            Status::TimedWaiting,
            Status::InterventionWaiting,
            Status::Paused,
            Status::Pausing,
        ]),
        Status::InterventionWaiting => StatusSet::BROKEN,
        Status::TimedWaiting
        | Status::AsyncWaiting
        | Status::ApprovalWaiting
        | Status::ResourceWaiting
        | Status::TaskWaiting
        | Status::Pausing
        | Status::Skipped => StatusSet::of(&[Status::Queued, Status::Running]),
        Status::Paused => StatusSet::of(&[Status::Queued, Status::Running, Status::Pausing]),
        Status::Discontinuing => StatusSet::ABORT_AND_EXPIRE_ELIGIBLE,
        Status::Queued => StatusSet::of(&[Status::Paused, Status::Pausing]),
        Status::Aborted
        | Status::Errored
        | Status::Suspended
        | Status::Failed
        | Status::Expired
        | Status::ApprovalRejected => StatusSet::FINALIZABLE,
        Status::Succeeded => StatusSet::of(&[
            Status::InterventionWaiting,
            Status::Running,
            Status::Queued,
        ]),
        Status::IgnoreFailed => StatusSet::BROKEN.with(Status::InterventionWaiting),
        Status::Unrecognized => StatusSet::EMPTY,
    }
}

/// Returns the statuses a plan execution may be in immediately before
/// moving to `to`. Statuses without a plan-specific rule use the node table.
#[must_use]
pub const fn plan_allowed_predecessors(to: Status) -> StatusSet {
    match to {
        Status::InterventionWaiting => {
            StatusSet::of(&[Status::Running, Status::Pausing, Status::Paused])
        }
        Status::Paused => StatusSet::of(&[
            Status::Queued,
            Status::Running,
            Status::Pausing,
            Status::InterventionWaiting,
        ]),
        Status::Succeeded => StatusSet::of(&[
            Status::Pausing,
            Status::InterventionWaiting,
            Status::Running,
        ]),
        _ => node_allowed_predecessors(to),
    }
}

/// Returns true if moving from `from` to `to` is legal under `policy`.
#[must_use]
pub const fn is_valid_transition(policy: TransitionPolicy, from: Status, to: Status) -> bool {
    policy.allowed_predecessors(to).contains(from)
}
