//! Tests for status aggregation.

#[cfg(test)]
mod tests {
    use crate::status::{aggregate, aggregate_for_node, aggregate_for_plan, Status, StatusSet};
    use crate::testing::capture_logs;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use Status::*;

    #[test]
    fn test_all_positive_is_succeeded() {
        assert_eq!(aggregate(&[Succeeded, Skipped]), Succeeded);
        assert_eq!(aggregate(&[Suspended]), Succeeded);
        assert_eq!(aggregate(&[Succeeded, Succeeded, Suspended, Skipped]), Succeeded);
    }

    #[test]
    fn test_ignore_failed_among_positive() {
        assert_eq!(aggregate(&[Succeeded, IgnoreFailed]), IgnoreFailed);
        assert_eq!(aggregate(&[IgnoreFailed]), IgnoreFailed);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(aggregate(&[Running, Failed]), Failed);
        assert_eq!(aggregate(&[Running, Aborted, Failed]), Aborted);
        assert_eq!(aggregate(&[Failed, Errored]), Errored);
        assert_eq!(aggregate(&[Expired, ApprovalRejected]), ApprovalRejected);
        assert_eq!(aggregate(&[Expired, InterventionWaiting]), Expired);
        assert_eq!(aggregate(&[ApprovalWaiting, InterventionWaiting]), InterventionWaiting);
        assert_eq!(aggregate(&[ResourceWaiting, ApprovalWaiting]), ApprovalWaiting);
        assert_eq!(aggregate(&[Queued, ResourceWaiting]), ResourceWaiting);
        assert_eq!(aggregate(&[Queued, Running]), Queued);
        assert_eq!(aggregate(&[Succeeded, Failed]), Failed);
    }

    #[test]
    fn test_flowing_is_running() {
        for status in [Running, AsyncWaiting, TaskWaiting, TimedWaiting, Discontinuing, Pausing] {
            assert_eq!(aggregate(&[Succeeded, status]), Running, "with {status}");
        }
        assert_eq!(aggregate(&[Paused, Pausing]), Running);
    }

    #[test]
    fn test_paused() {
        assert_eq!(aggregate(&[Paused]), Paused);
        assert_eq!(aggregate(&[Paused, Succeeded]), Paused);
    }

    #[test]
    fn test_undeterminable() {
        assert_eq!(aggregate(&[]), Unrecognized);
        assert_eq!(aggregate(&[Unrecognized]), Unrecognized);
        assert_eq!(aggregate(&[Succeeded, Unrecognized]), Unrecognized);
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(aggregate(&[Failed, Running, Aborted]), aggregate(&[Aborted, Failed, Running]));
    }

    #[test]
    fn test_plan_wrapper_masks_unrecognized() {
        let (status, logs) = capture_logs(|| aggregate_for_plan(&[], "plan-exec-9"));

        assert_eq!(status, Errored);
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("Cannot calculate the end status for plan execution"));
        assert!(logs.contains("plan-exec-9"));
    }

    #[test]
    fn test_node_wrapper_masks_unrecognized() {
        let (status, logs) = capture_logs(|| aggregate_for_node(&[Unrecognized], "node-exec-3"));

        assert_eq!(status, Errored);
        assert!(logs.contains("Cannot calculate the end status for node execution"));
        assert!(logs.contains("node-exec-3"));
        assert!(logs.contains("UNRECOGNIZED") || logs.contains("Unrecognized"));
    }

    #[test]
    fn test_wrappers_pass_through_and_stay_quiet() {
        let (status, logs) = capture_logs(|| {
            assert_eq!(aggregate_for_node(&[Running, Failed], "n"), Failed);
            aggregate_for_plan(&[Succeeded, Skipped], "p")
        });

        assert_eq!(status, Succeeded);
        assert_eq!(logs, "");
    }

    fn arb_status() -> impl Strategy<Value = Status> {
        prop::sample::select(Status::ALL.to_vec())
    }

    fn arb_positive() -> impl Strategy<Value = Status> {
        prop::sample::select(StatusSet::POSITIVE.iter().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn prop_positive_only_is_succeeded_or_ignore_failed(
            statuses in prop::collection::vec(arb_positive(), 1..10)
        ) {
            let expected = if statuses.contains(&IgnoreFailed) { IgnoreFailed } else { Succeeded };
            prop_assert_eq!(aggregate(&statuses), expected);
        }

        #[test]
        fn prop_aborted_dominates(mut statuses in prop::collection::vec(arb_status(), 0..10)) {
            statuses.push(Aborted);
            prop_assert_eq!(aggregate(&statuses), Aborted);
        }

        #[test]
        fn prop_wrappers_never_unrecognized(statuses in prop::collection::vec(arb_status(), 0..10)) {
            let (plan, _) = capture_logs(|| aggregate_for_plan(&statuses, "p"));
            prop_assert_ne!(plan, Unrecognized);
            let (node, _) = capture_logs(|| aggregate_for_node(&statuses, "n"));
            prop_assert_ne!(node, Unrecognized);
        }
    }
}
