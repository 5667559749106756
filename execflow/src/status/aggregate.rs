//! Derivation of a parent status from its children's statuses.

use super::{Status, StatusSet};

/// Single-status rules checked after the all-positive rules, highest
/// precedence first.
const PRECEDENCE: [Status; 9] = [
    Status::Aborted,
    Status::Errored,
    Status::Failed,
    Status::ApprovalRejected,
    Status::Expired,
    Status::InterventionWaiting,
    Status::ApprovalWaiting,
    Status::ResourceWaiting,
    Status::Queued,
];

/// Computes one composite status from the statuses of all children.
///
/// The first matching rule wins:
/// 1. all children positive and at least one `IGNORE_FAILED` → `IGNORE_FAILED`
/// 2. all children positive → `SUCCEEDED`
/// 3. the first of `ABORTED`, `ERRORED`, `FAILED`, `APPROVAL_REJECTED`,
///    `EXPIRED`, `INTERVENTION_WAITING`, `APPROVAL_WAITING`,
///    `RESOURCE_WAITING`, `QUEUED` present among the children
/// 4. any child flowing → `RUNNING`
/// 5. any child `PAUSED` → `PAUSED`
/// 6. otherwise `UNRECOGNIZED`
///
/// An empty list matches no rule and yields `UNRECOGNIZED`. Callers outside
/// the engine core should go through [`aggregate_for_plan`] or
/// [`aggregate_for_node`], which never return `UNRECOGNIZED`.
#[must_use]
pub fn aggregate(statuses: &[Status]) -> Status {
    let present: StatusSet = statuses.iter().collect();

    if !present.is_empty() && present.is_subset(StatusSet::POSITIVE) {
        if present.contains(Status::IgnoreFailed) {
            return Status::IgnoreFailed;
        }
        return Status::Succeeded;
    }

    if let Some(status) = PRECEDENCE.into_iter().find(|s| present.contains(*s)) {
        return status;
    }

    if present.intersects(StatusSet::FLOWING) {
        return Status::Running;
    }

    if present.contains(Status::Paused) {
        return Status::Paused;
    }

    Status::Unrecognized
}

/// Aggregates the children of a plan execution.
///
/// An undeterminable result is logged against `plan_execution_id` and
/// reported as `ERRORED`.
#[must_use]
pub fn aggregate_for_plan(statuses: &[Status], plan_execution_id: &str) -> Status {
    match aggregate(statuses) {
        Status::Unrecognized => {
            tracing::error!(
                plan_execution_id = %plan_execution_id,
                ?statuses,
                "Cannot calculate the end status for plan execution"
            );
            Status::Errored
        }
        status => status,
    }
}

/// Aggregates the children of a single node execution.
///
/// An undeterminable result is logged against `node_execution_id` and
/// reported as `ERRORED`.
#[must_use]
pub fn aggregate_for_node(statuses: &[Status], node_execution_id: &str) -> Status {
    match aggregate(statuses) {
        Status::Unrecognized => {
            tracing::error!(
                node_execution_id = %node_execution_id,
                ?statuses,
                "Cannot calculate the end status for node execution"
            );
            Status::Errored
        }
        status => status,
    }
}
