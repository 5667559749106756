//! Mapping between the internal and external failure taxonomies.

use super::{ExternalFailureType, FailureType};
use crate::errors::{ExecflowError, Result};
use std::collections::BTreeSet;

/// Maps an external failure type to the internal taxonomy.
///
/// Both expiry and timeout collapse into [`FailureType::Timeout`]; an
/// unrecognized external value maps to [`FailureType::Unknown`].
#[must_use]
pub const fn to_internal(external: ExternalFailureType) -> FailureType {
    match external {
        ExternalFailureType::DelegateProvisioning => FailureType::DelegateProvisioning,
        ExternalFailureType::Connectivity => FailureType::Connectivity,
        ExternalFailureType::Authentication => FailureType::Authentication,
        ExternalFailureType::Verification => FailureType::Verification,
        ExternalFailureType::ApplicationError => FailureType::Application,
        ExternalFailureType::Authorization => FailureType::Authorization,
        ExternalFailureType::TimeoutError | ExternalFailureType::Expired => FailureType::Timeout,
        ExternalFailureType::PolicyEvaluationFailure => FailureType::PolicyEvaluation,
        ExternalFailureType::InputTimeoutFailure => FailureType::InputTimeout,
        ExternalFailureType::ApprovalRejection => FailureType::ApprovalRejection,
        ExternalFailureType::DelegateRestart => FailureType::DelegateRestart,
        ExternalFailureType::UserMarkedFailure => FailureType::UserMarked,
        ExternalFailureType::Unrecognized => FailureType::Unknown,
    }
}

/// Maps an internal failure type to the external taxonomy.
///
/// [`FailureType::Unknown`] and [`FailureType::Skipping`] have no external
/// counterpart and are rejected.
pub fn to_external(internal: FailureType) -> Result<ExternalFailureType> {
    let external = match internal {
        FailureType::DelegateProvisioning => ExternalFailureType::DelegateProvisioning,
        FailureType::Connectivity => ExternalFailureType::Connectivity,
        FailureType::Authentication => ExternalFailureType::Authentication,
        FailureType::Verification => ExternalFailureType::Verification,
        FailureType::Application => ExternalFailureType::ApplicationError,
        FailureType::Authorization => ExternalFailureType::Authorization,
        FailureType::Timeout => ExternalFailureType::TimeoutError,
        FailureType::PolicyEvaluation => ExternalFailureType::PolicyEvaluationFailure,
        FailureType::InputTimeout => ExternalFailureType::InputTimeoutFailure,
        FailureType::ApprovalRejection => ExternalFailureType::ApprovalRejection,
        FailureType::DelegateRestart => ExternalFailureType::DelegateRestart,
        FailureType::UserMarked => ExternalFailureType::UserMarkedFailure,
        FailureType::Skipping | FailureType::Unknown => {
            return Err(ExecflowError::unsupported_failure_type(internal));
        }
    };
    Ok(external)
}

/// Maps a set of external failure types to internal ones.
#[must_use]
pub fn to_internal_set(external: &BTreeSet<ExternalFailureType>) -> BTreeSet<FailureType> {
    if external.is_empty() {
        return BTreeSet::new();
    }
    external.iter().copied().map(to_internal).collect()
}

/// Maps a set of internal failure types to external ones.
///
/// Fails on the first type with no external counterpart.
pub fn to_external_set(internal: &BTreeSet<FailureType>) -> Result<BTreeSet<ExternalFailureType>> {
    if internal.is_empty() {
        return Ok(BTreeSet::new());
    }
    internal.iter().copied().map(to_external).collect()
}
