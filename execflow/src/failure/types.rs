//! The two failure taxonomies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an execution failed, as the engine classifies it internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureType {
    /// Worker (delegate) could not be provisioned.
    #[serde(rename = "DELEGATE_PROVISIONING_FAILURE")]
    DelegateProvisioning,
    /// A remote endpoint could not be reached.
    #[serde(rename = "CONNECTIVITY_FAILURE")]
    Connectivity,
    /// Credentials were rejected.
    #[serde(rename = "AUTHENTICATION_FAILURE")]
    Authentication,
    /// A verification step failed.
    #[serde(rename = "VERIFICATION_FAILURE")]
    Verification,
    /// The workload itself failed.
    #[serde(rename = "APPLICATION_FAILURE")]
    Application,
    /// Access was denied.
    #[serde(rename = "AUTHORIZATION_FAILURE")]
    Authorization,
    /// The execution ran out of time.
    #[serde(rename = "TIMEOUT_FAILURE")]
    Timeout,
    /// A governance policy rejected the execution.
    #[serde(rename = "POLICY_EVALUATION_FAILURE")]
    PolicyEvaluation,
    /// A runtime input was not provided in time.
    #[serde(rename = "INPUT_TIMEOUT_FAILURE")]
    InputTimeout,
    /// An approval was rejected.
    ApprovalRejection,
    /// The worker restarted mid-execution.
    DelegateRestart,
    /// A user explicitly marked the execution failed.
    #[serde(rename = "USER_MARKED_FAILURE")]
    UserMarked,
    /// The execution failed while being skipped.
    #[serde(rename = "SKIPPING_FAILURE")]
    Skipping,
    /// Unclassified, including values this build does not know.
    #[serde(rename = "UNKNOWN_FAILURE")]
    #[serde(other)]
    Unknown,
}

impl FailureType {
    /// All internal failure types.
    pub const ALL: [Self; 14] = [
        Self::DelegateProvisioning,
        Self::Connectivity,
        Self::Authentication,
        Self::Verification,
        Self::Application,
        Self::Authorization,
        Self::Timeout,
        Self::PolicyEvaluation,
        Self::InputTimeout,
        Self::ApprovalRejection,
        Self::DelegateRestart,
        Self::UserMarked,
        Self::Skipping,
        Self::Unknown,
    ];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DelegateProvisioning => "DELEGATE_PROVISIONING_FAILURE",
            Self::Connectivity => "CONNECTIVITY_FAILURE",
            Self::Authentication => "AUTHENTICATION_FAILURE",
            Self::Verification => "VERIFICATION_FAILURE",
            Self::Application => "APPLICATION_FAILURE",
            Self::Authorization => "AUTHORIZATION_FAILURE",
            Self::Timeout => "TIMEOUT_FAILURE",
            Self::PolicyEvaluation => "POLICY_EVALUATION_FAILURE",
            Self::InputTimeout => "INPUT_TIMEOUT_FAILURE",
            Self::ApprovalRejection => "APPROVAL_REJECTION",
            Self::DelegateRestart => "DELEGATE_RESTART",
            Self::UserMarked => "USER_MARKED_FAILURE",
            Self::Skipping => "SKIPPING_FAILURE",
            Self::Unknown => "UNKNOWN_FAILURE",
        }
    }
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an execution failed, as the external (legacy) taxonomy names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExternalFailureType {
    /// Worker could not be provisioned.
    DelegateProvisioning,
    /// Network connectivity failure.
    Connectivity,
    /// Authentication failure.
    Authentication,
    /// Verification failure.
    Verification,
    /// Application error.
    ApplicationError,
    /// Authorization failure.
    Authorization,
    /// Timed out.
    TimeoutError,
    /// Expired while waiting.
    Expired,
    /// Policy evaluation failure.
    PolicyEvaluationFailure,
    /// Runtime input timed out.
    InputTimeoutFailure,
    /// Approval rejected.
    ApprovalRejection,
    /// Worker restarted.
    DelegateRestart,
    /// Marked failed by a user.
    UserMarkedFailure,
    /// A type this build does not know.
    #[serde(other)]
    Unrecognized,
}

impl ExternalFailureType {
    /// All external failure types.
    pub const ALL: [Self; 14] = [
        Self::DelegateProvisioning,
        Self::Connectivity,
        Self::Authentication,
        Self::Verification,
        Self::ApplicationError,
        Self::Authorization,
        Self::TimeoutError,
        Self::Expired,
        Self::PolicyEvaluationFailure,
        Self::InputTimeoutFailure,
        Self::ApprovalRejection,
        Self::DelegateRestart,
        Self::UserMarkedFailure,
        Self::Unrecognized,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_type_wire_names() {
        for failure_type in FailureType::ALL {
            let json = serde_json::to_string(&failure_type).unwrap();
            assert_eq!(json, format!("\"{failure_type}\""));
        }
    }

    #[test]
    fn test_unknown_names_decode_to_fallback() {
        let internal: FailureType = serde_json::from_str("\"QUOTA_FAILURE\"").unwrap();
        assert_eq!(internal, FailureType::Unknown);

        let external: ExternalFailureType = serde_json::from_str("\"QUOTA\"").unwrap();
        assert_eq!(external, ExternalFailureType::Unrecognized);
    }

    #[test]
    fn test_external_wire_names() {
        assert_eq!(
            serde_json::to_string(&ExternalFailureType::TimeoutError).unwrap(),
            "\"TIMEOUT_ERROR\""
        );
        assert_eq!(
            serde_json::to_string(&ExternalFailureType::PolicyEvaluationFailure).unwrap(),
            "\"POLICY_EVALUATION_FAILURE\""
        );
    }
}
