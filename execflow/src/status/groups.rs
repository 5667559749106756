//! Named status groups.

use super::{Status, StatusSet};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Status::{
    Aborted, ApprovalRejected, ApprovalWaiting, AsyncWaiting, Discontinuing, Errored, Expired,
    Failed, IgnoreFailed, InterventionWaiting, Paused, Pausing, Queued, ResourceWaiting, Running,
    Skipped, Succeeded, Suspended, TaskWaiting, TimedWaiting,
};

impl StatusSet {
    /// Statuses from which a node may still be moved into a terminal status.
    pub const FINALIZABLE: Self = Self::of(&[
        Queued,
        Running,
        Paused,
        Pausing,
        AsyncWaiting,
        TaskWaiting,
        TimedWaiting,
        ApprovalWaiting,
        ResourceWaiting,
        InterventionWaiting,
        Discontinuing,
    ]);

    /// Statuses an abort or expiry may interrupt.
    pub const ABORT_AND_EXPIRE_ELIGIBLE: Self =
        Self::FINALIZABLE.difference(Self::of(&[Discontinuing]));

    /// Statuses counted as success by aggregation.
    pub const POSITIVE: Self = Self::of(&[Succeeded, Skipped, Suspended, IgnoreFailed]);

    /// Statuses counted as hard failure.
    pub const BROKEN: Self = Self::of(&[Failed, Errored, Expired, ApprovalRejected]);

    /// Statuses from which execution can be resumed.
    pub const RESUMABLE: Self = Self::of(&[
        Queued,
        Running,
        AsyncWaiting,
        TaskWaiting,
        TimedWaiting,
        ApprovalWaiting,
        ResourceWaiting,
        InterventionWaiting,
    ]);

    /// Statuses counted as still running by aggregation.
    pub const FLOWING: Self = Self::of(&[
        Running,
        AsyncWaiting,
        TaskWaiting,
        TimedWaiting,
        Discontinuing,
        Pausing,
    ]);

    /// Statuses of a node that is still in flight.
    pub const ACTIVE: Self = Self::FLOWING.union(Self::of(&[
        Queued,
        Paused,
        ApprovalWaiting,
        ResourceWaiting,
        InterventionWaiting,
    ]));

    /// Terminal statuses; no further transition is possible.
    pub const FINAL: Self = Self::of(&[
        Skipped,
        IgnoreFailed,
        Aborted,
        Errored,
        Failed,
        Expired,
        Succeeded,
        Suspended,
        ApprovalRejected,
    ]);

    /// Child statuses a pause request leaves untouched.
    pub const UNPAUSABLE_CHILD: Self =
        Self::FINAL.union(Self::of(&[Paused, Pausing, Discontinuing, InterventionWaiting]));

    /// Statuses whose write must refresh the execution graph.
    pub const GRAPH_UPDATE_TRIGGERING: Self = Self::FINAL.union(Self::of(&[
        Queued,
        Running,
        Paused,
        AsyncWaiting,
        TaskWaiting,
        TimedWaiting,
        ApprovalWaiting,
        ResourceWaiting,
        InterventionWaiting,
    ]));

    /// Statuses from which a retry may be started.
    pub const RETRYABLE: Self = Self::BROKEN.union(Self::of(&[Aborted, InterventionWaiting]));

    /// Failed statuses eligible for retry.
    pub const RETRYABLE_FAILED: Self = Self::BROKEN;
}

/// The named, overlapping groups over [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusGroup {
    /// See [`StatusSet::FINALIZABLE`].
    Finalizable,
    /// See [`StatusSet::ABORT_AND_EXPIRE_ELIGIBLE`].
    AbortAndExpireEligible,
    /// See [`StatusSet::POSITIVE`].
    Positive,
    /// See [`StatusSet::BROKEN`].
    Broken,
    /// See [`StatusSet::RESUMABLE`].
    Resumable,
    /// See [`StatusSet::FLOWING`].
    Flowing,
    /// See [`StatusSet::ACTIVE`].
    Active,
    /// See [`StatusSet::UNPAUSABLE_CHILD`].
    UnpausableChild,
    /// See [`StatusSet::FINAL`].
    Final,
    /// See [`StatusSet::GRAPH_UPDATE_TRIGGERING`].
    GraphUpdateTriggering,
    /// See [`StatusSet::RETRYABLE`].
    Retryable,
    /// See [`StatusSet::RETRYABLE_FAILED`].
    RetryableFailed,
}

impl StatusGroup {
    /// Every group.
    pub const ALL: [Self; 12] = [
        Self::Finalizable,
        Self::AbortAndExpireEligible,
        Self::Positive,
        Self::Broken,
        Self::Resumable,
        Self::Flowing,
        Self::Active,
        Self::UnpausableChild,
        Self::Final,
        Self::GraphUpdateTriggering,
        Self::Retryable,
        Self::RetryableFailed,
    ];

    /// Returns the members of the group.
    #[must_use]
    pub const fn members(self) -> StatusSet {
        match self {
            Self::Finalizable => StatusSet::FINALIZABLE,
            Self::AbortAndExpireEligible => StatusSet::ABORT_AND_EXPIRE_ELIGIBLE,
            Self::Positive => StatusSet::POSITIVE,
            Self::Broken => StatusSet::BROKEN,
            Self::Resumable => StatusSet::RESUMABLE,
            Self::Flowing => StatusSet::FLOWING,
            Self::Active => StatusSet::ACTIVE,
            Self::UnpausableChild => StatusSet::UNPAUSABLE_CHILD,
            Self::Final => StatusSet::FINAL,
            Self::GraphUpdateTriggering => StatusSet::GRAPH_UPDATE_TRIGGERING,
            Self::Retryable => StatusSet::RETRYABLE,
            Self::RetryableFailed => StatusSet::RETRYABLE_FAILED,
        }
    }
}

impl fmt::Display for StatusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finalizable => write!(f, "finalizable"),
            Self::AbortAndExpireEligible => write!(f, "abort_and_expire_eligible"),
            Self::Positive => write!(f, "positive"),
            Self::Broken => write!(f, "broken"),
            Self::Resumable => write!(f, "resumable"),
            Self::Flowing => write!(f, "flowing"),
            Self::Active => write!(f, "active"),
            Self::UnpausableChild => write!(f, "unpausable_child"),
            Self::Final => write!(f, "final"),
            Self::GraphUpdateTriggering => write!(f, "graph_update_triggering"),
            Self::Retryable => write!(f, "retryable"),
            Self::RetryableFailed => write!(f, "retryable_failed"),
        }
    }
}
