//! The execution status enum.

use super::{StatusGroup, StatusSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The execution state of one node (step, stage or pipeline).
///
/// Serialized as the SCREAMING_SNAKE_CASE wire name. Values a newer peer
/// sends that this build does not know decode to [`Status::Unrecognized`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Waiting to be picked up.
    #[default]
    Queued,
    /// Actively executing.
    Running,
    /// Paused by a user.
    Paused,
    /// A pause was requested and is being applied.
    Pausing,
    /// Waiting on an async callback.
    AsyncWaiting,
    /// Waiting on a delegated task.
    TaskWaiting,
    /// Waiting on a timer.
    TimedWaiting,
    /// Waiting on an approval.
    ApprovalWaiting,
    /// Waiting on a resource constraint.
    ResourceWaiting,
    /// Waiting on manual intervention.
    InterventionWaiting,
    /// An abort was requested and is being applied.
    Discontinuing,
    /// Completed successfully.
    Succeeded,
    /// Completed with a failure.
    Failed,
    /// Completed with an engine error.
    Errored,
    /// Timed out.
    Expired,
    /// Aborted by a user or the engine.
    Aborted,
    /// Suspended; counts as success for aggregation.
    Suspended,
    /// Skipped by a condition.
    Skipped,
    /// Failed, but the failure was configured to be ignored.
    IgnoreFailed,
    /// Rejected by an approver.
    ApprovalRejected,
    /// Status could not be determined or was not understood.
    #[serde(other)]
    Unrecognized,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Queued,
        Self::Running,
        Self::Paused,
        Self::Pausing,
        Self::AsyncWaiting,
        Self::TaskWaiting,
        Self::TimedWaiting,
        Self::ApprovalWaiting,
        Self::ResourceWaiting,
        Self::InterventionWaiting,
        Self::Discontinuing,
        Self::Succeeded,
        Self::Failed,
        Self::Errored,
        Self::Expired,
        Self::Aborted,
        Self::Suspended,
        Self::Skipped,
        Self::IgnoreFailed,
        Self::ApprovalRejected,
        Self::Unrecognized,
    ];

    /// Returns the bit this status occupies in a [`StatusSet`].
    pub(crate) const fn bit(self) -> u32 {
        1u32 << (self as u32)
    }

    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "QUEUED",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
            Self::Pausing => "PAUSING",
            Self::AsyncWaiting => "ASYNC_WAITING",
            Self::TaskWaiting => "TASK_WAITING",
            Self::TimedWaiting => "TIMED_WAITING",
            Self::ApprovalWaiting => "APPROVAL_WAITING",
            Self::ResourceWaiting => "RESOURCE_WAITING",
            Self::InterventionWaiting => "INTERVENTION_WAITING",
            Self::Discontinuing => "DISCONTINUING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Errored => "ERRORED",
            Self::Expired => "EXPIRED",
            Self::Aborted => "ABORTED",
            Self::Suspended => "SUSPENDED",
            Self::Skipped => "SKIPPED",
            Self::IgnoreFailed => "IGNORE_FAILED",
            Self::ApprovalRejected => "APPROVAL_REJECTED",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Returns true if the status belongs to the given group.
    #[must_use]
    pub const fn is_in(self, group: StatusGroup) -> bool {
        group.members().contains(self)
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_final(self) -> bool {
        StatusSet::FINAL.contains(self)
    }

    /// Returns true if the status counts as success for aggregation.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        StatusSet::POSITIVE.contains(self)
    }

    /// Returns true if the status counts as a hard failure.
    #[must_use]
    pub const fn is_broken(self) -> bool {
        StatusSet::BROKEN.contains(self)
    }

    /// Returns true if the status counts as still running for aggregation.
    #[must_use]
    pub const fn is_flowing(self) -> bool {
        StatusSet::FLOWING.contains(self)
    }

    /// Returns true if the node is still in flight.
    #[must_use]
    pub const fn is_active(self) -> bool {
        StatusSet::ACTIVE.contains(self)
    }

    /// Returns true if execution can be resumed from this status.
    #[must_use]
    pub const fn is_resumable(self) -> bool {
        StatusSet::RESUMABLE.contains(self)
    }

    /// Returns true if the node may be moved into a terminal status.
    #[must_use]
    pub const fn is_finalizable(self) -> bool {
        StatusSet::FINALIZABLE.contains(self)
    }

    /// Returns true if the node may be retried from this status.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        StatusSet::RETRYABLE.contains(self)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Running.to_string(), "RUNNING");
        assert_eq!(Status::InterventionWaiting.to_string(), "INTERVENTION_WAITING");
        assert_eq!(Status::IgnoreFailed.to_string(), "IGNORE_FAILED");
    }

    #[test]
    fn test_status_serialize_matches_display() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_default_is_queued() {
        assert_eq!(Status::default(), Status::Queued);
    }

    #[test]
    fn test_unknown_wire_value_is_unrecognized() {
        let status: Status = serde_json::from_str(r#""QUEUED_LICENSE_LIMIT_REACHED""#).unwrap();
        assert_eq!(status, Status::Unrecognized);
    }

    #[test]
    fn test_bits_are_distinct() {
        let mut seen = 0u32;
        for status in Status::ALL {
            assert_eq!(seen & status.bit(), 0, "{status} shares a bit");
            seen |= status.bit();
        }
    }

    #[test]
    fn test_status_predicates() {
        assert!(Status::Succeeded.is_final());
        assert!(Status::Skipped.is_positive());
        assert!(Status::Expired.is_broken());
        assert!(Status::Discontinuing.is_flowing());
        assert!(!Status::Paused.is_flowing());
        assert!(Status::Paused.is_active());
        assert!(!Status::Paused.is_resumable());
        assert!(Status::InterventionWaiting.is_retryable());
        assert!(!Status::Unrecognized.is_final());
        assert!(!Status::Unrecognized.is_active());
    }
}
