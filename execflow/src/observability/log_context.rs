//! Log-correlation fields derived from an execution context.

use crate::context::ExecutionContext;
use std::collections::BTreeMap;
use tracing::field;
use tracing::span::EnteredSpan;

/// Keys of the log-correlation map. Log shippers depend on these names.
pub mod keys {
    /// The plan execution ID.
    pub const PLAN_EXECUTION_ID: &str = "planExecutionId";
    /// The current frame's identifier.
    pub const IDENTIFIER: &str = "identifier";
    /// The current frame's runtime ID.
    pub const RUNTIME_ID: &str = "runtimeId";
    /// The current frame's setup ID.
    pub const SETUP_ID: &str = "setupId";
    /// The current frame's step type name.
    pub const STEP_TYPE: &str = "stepType";
}

/// A flat string map of correlation fields for one execution scope.
///
/// Holds every setup abstraction plus `planExecutionId`, and when a frame is
/// current, its `identifier`, `runtimeId`, `setupId` and `stepType`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogContext {
    fields: BTreeMap<String, String>,
}

impl LogContext {
    /// Extracts the correlation fields of `ctx`.
    #[must_use]
    pub fn from_context(ctx: &ExecutionContext) -> Self {
        let mut fields = ctx.setup_abstractions().clone();
        fields.insert(
            keys::PLAN_EXECUTION_ID.to_string(),
            ctx.plan_execution_id().to_string(),
        );
        if let Some(frame) = ctx.current_frame() {
            fields.insert(keys::IDENTIFIER.to_string(), frame.identifier().to_string());
            fields.insert(keys::RUNTIME_ID.to_string(), frame.runtime_id().to_string());
            fields.insert(keys::SETUP_ID.to_string(), frame.setup_id().to_string());
            fields.insert(
                keys::STEP_TYPE.to_string(),
                frame.step_type().step_type.clone(),
            );
        }
        Self { fields }
    }

    /// Returns a field by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the context and returns the flat map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.fields
    }

    /// Builds an `execution` span carrying the correlation fields.
    ///
    /// The frame fields are recorded as span fields. Setup abstractions,
    /// whose keys are not known up front, are recorded together under
    /// `setup`.
    #[must_use]
    pub fn span(&self) -> tracing::Span {
        let span = tracing::info_span!(
            "execution",
            plan_execution_id = field::Empty,
            identifier = field::Empty,
            runtime_id = field::Empty,
            setup_id = field::Empty,
            step_type = field::Empty,
            setup = field::Empty,
        );

        let mut setup: Vec<(&str, &str)> = Vec::new();
        for (key, value) in &self.fields {
            match key.as_str() {
                keys::PLAN_EXECUTION_ID => {
                    span.record("plan_execution_id", value.as_str());
                }
                keys::IDENTIFIER => {
                    span.record("identifier", value.as_str());
                }
                keys::RUNTIME_ID => {
                    span.record("runtime_id", value.as_str());
                }
                keys::SETUP_ID => {
                    span.record("setup_id", value.as_str());
                }
                keys::STEP_TYPE => {
                    span.record("step_type", value.as_str());
                }
                _ => setup.push((key.as_str(), value.as_str())),
            }
        }
        if !setup.is_empty() {
            span.record("setup", field::debug(&setup));
        }
        span
    }

    /// Enters [`Self::span`]; the scope ends when the guard drops.
    #[must_use]
    pub fn enter(&self) -> EnteredSpan {
        self.span().entered()
    }
}

impl From<&ExecutionContext> for LogContext {
    fn from(ctx: &ExecutionContext) -> Self {
        Self::from_context(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::keys as setup_keys;
    use crate::testing::{capture_logs, sample_context, PLAN_EXECUTION_ID};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_context_with_frame() {
        let log = LogContext::from_context(&sample_context());

        assert_eq!(log.get(keys::PLAN_EXECUTION_ID), Some(PLAN_EXECUTION_ID));
        assert_eq!(log.get(keys::IDENTIFIER), Some("step1"));
        assert_eq!(log.get(keys::RUNTIME_ID), Some("step1-runtime"));
        assert_eq!(log.get(keys::SETUP_ID), Some("step1-setup"));
        assert_eq!(log.get(keys::STEP_TYPE), Some("HTTP"));
        assert_eq!(log.get(setup_keys::ACCOUNT_ID), Some("acc-1"));
        assert_eq!(log.len(), 8);
    }

    #[test]
    fn test_from_empty_context() {
        let ctx = ExecutionContext::new("p").with_setup_abstraction("appId", "app");
        let map = LogContext::from(&ctx).into_map();

        let expected: BTreeMap<String, String> = [
            ("planExecutionId".to_string(), "p".to_string()),
            ("appId".to_string(), "app".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(map, expected);
    }

    #[test]
    fn test_context_map_matches_extractor() {
        let ctx = sample_context();
        assert_eq!(ctx.log_context_map(), LogContext::from_context(&ctx).into_map());
    }

    #[test]
    fn test_entered_span_decorates_events() {
        let ((), logs) = capture_logs(|| {
            let log = LogContext::from_context(&sample_context());
            let _guard = log.enter();
            tracing::info!("step started");
        });

        assert!(logs.contains("step started"));
        let line = logs.lines().find(|l| l.contains("step started")).unwrap();
        assert!(line.contains("execution{"));
        assert!(line.contains("plan-exec-1"));
        assert!(line.contains("step1-runtime"));
        assert!(line.contains("accountId"));
    }

    #[test]
    fn test_span_scope_ends_with_guard() {
        let ((), logs) = capture_logs(|| {
            {
                let _guard = LogContext::from_context(&sample_context()).enter();
                tracing::info!("inside");
            }
            tracing::info!("outside");
        });

        let outside = logs.lines().find(|l| l.contains("outside")).unwrap();
        assert!(!outside.contains("step1-runtime"));
    }
}
