//! Wait-advice classification.
//!
//! When a node cannot proceed, the engine produces an advice saying what
//! should happen next. Only one kind of advice means execution is blocked
//! until someone intervenes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the engine should do next with a node that cannot proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdviseType {
    /// Move on to the next node.
    NextStep,
    /// Run the node again.
    Retry,
    /// Wait for manual intervention.
    InterventionWait,
    /// End the whole plan.
    EndPlan,
    /// Treat the failure as ignored.
    IgnoreFailure,
    /// Mark the node succeeded.
    MarkSuccess,
    /// Continue with the default value.
    ProceedWithDefault,
    /// Mark the node failed.
    MarkAsFailure,
    /// An advice this build does not know.
    #[serde(other)]
    Unrecognized,
}

impl AdviseType {
    /// All advice kinds.
    pub const ALL: [Self; 9] = [
        Self::NextStep,
        Self::Retry,
        Self::InterventionWait,
        Self::EndPlan,
        Self::IgnoreFailure,
        Self::MarkSuccess,
        Self::ProceedWithDefault,
        Self::MarkAsFailure,
        Self::Unrecognized,
    ];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NextStep => "NEXT_STEP",
            Self::Retry => "RETRY",
            Self::InterventionWait => "INTERVENTION_WAIT",
            Self::EndPlan => "END_PLAN",
            Self::IgnoreFailure => "IGNORE_FAILURE",
            Self::MarkSuccess => "MARK_SUCCESS",
            Self::ProceedWithDefault => "PROCEED_WITH_DEFAULT",
            Self::MarkAsFailure => "MARK_AS_FAILURE",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for AdviseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true iff `advise` blocks execution pending intervention.
///
/// Retries and other kinds that also delay the node do not count.
#[must_use]
pub const fn is_waiting_advice(advise: AdviseType) -> bool {
    matches!(advise, AdviseType::InterventionWait)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_waiting_advice() {
        let waiting: Vec<_> = AdviseType::ALL
            .into_iter()
            .filter(|a| is_waiting_advice(*a))
            .collect();
        assert_eq!(waiting, vec![AdviseType::InterventionWait]);
    }

    #[test]
    fn test_retry_is_not_waiting() {
        assert!(!is_waiting_advice(AdviseType::Retry));
        assert!(!is_waiting_advice(AdviseType::Unrecognized));
    }

    #[test]
    fn test_wire_names() {
        for advise in AdviseType::ALL {
            let json = serde_json::to_string(&advise).unwrap();
            assert_eq!(json, format!("\"{advise}\""));
        }
        let decoded: AdviseType = serde_json::from_str("\"SUSPEND_NODE\"").unwrap();
        assert_eq!(decoded, AdviseType::Unrecognized);
    }
}
