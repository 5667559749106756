//! One nesting level of a running execution.

use crate::utils::{generate_runtime_id, millis_to_datetime, now_millis, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of unit a frame represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepCategory {
    /// The whole pipeline.
    Pipeline,
    /// A stage inside a pipeline.
    Stage,
    /// A group of steps inside a stage.
    StepGroup,
    /// A single step, or a structural wrapper around steps.
    #[default]
    Step,
    /// A looping/matrix/parallelism strategy wrapper.
    Strategy,
    /// A parallel fork.
    Fork,
    /// A category this build does not know.
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for StepCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipeline => write!(f, "PIPELINE"),
            Self::Stage => write!(f, "STAGE"),
            Self::StepGroup => write!(f, "STEP_GROUP"),
            Self::Step => write!(f, "STEP"),
            Self::Strategy => write!(f, "STRATEGY"),
            Self::Fork => write!(f, "FORK"),
            Self::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

/// What a frame executes: a free-form type name plus its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StepType {
    /// The step type name (e.g. `"HTTP"`, `"DEPLOYMENT_STAGE"`).
    #[serde(rename = "type")]
    pub step_type: String,
    /// The category of the step.
    pub category: StepCategory,
}

impl StepType {
    /// Creates a new step type.
    #[must_use]
    pub fn new(step_type: impl Into<String>, category: StepCategory) -> Self {
        Self {
            step_type: step_type.into(),
            category,
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.step_type)
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// One nesting level (pipeline, stage, step, ...) of an execution.
///
/// Frames are immutable once built: fields are only readable, and the
/// `with_*` methods consume the frame and return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    identifier: String,
    runtime_id: String,
    setup_id: String,
    step_type: StepType,
    #[serde(default)]
    group: String,
    start_timestamp: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    retry_index: u32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    skip_expression_chain: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    node_type: Option<String>,
}

impl Frame {
    /// Creates a frame with every identifying field set.
    ///
    /// `start_timestamp` is in epoch milliseconds.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        runtime_id: impl Into<String>,
        setup_id: impl Into<String>,
        step_type: StepType,
        start_timestamp: i64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            runtime_id: runtime_id.into(),
            setup_id: setup_id.into(),
            step_type,
            group: String::new(),
            start_timestamp,
            retry_index: 0,
            skip_expression_chain: false,
            node_type: None,
        }
    }

    /// Creates a frame for a scope starting now, with a fresh runtime ID.
    #[must_use]
    pub fn start(
        identifier: impl Into<String>,
        setup_id: impl Into<String>,
        step_type: StepType,
    ) -> Self {
        Self::new(
            identifier,
            generate_runtime_id(),
            setup_id,
            step_type,
            now_millis(),
        )
    }

    /// Sets the logical group tag.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the retry index.
    #[must_use]
    pub fn with_retry_index(mut self, retry_index: u32) -> Self {
        self.retry_index = retry_index;
        self
    }

    /// Excludes this frame from fully qualified names.
    #[must_use]
    pub fn with_skip_expression_chain(mut self, skip: bool) -> Self {
        self.skip_expression_chain = skip;
        self
    }

    /// Sets the plan node type.
    #[must_use]
    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    /// Returns the human-readable identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the ID unique to this execution instance.
    #[must_use]
    pub fn runtime_id(&self) -> &str {
        &self.runtime_id
    }

    /// Returns the ID of the static plan node.
    #[must_use]
    pub fn setup_id(&self) -> &str {
        &self.setup_id
    }

    /// Returns the step type.
    #[must_use]
    pub fn step_type(&self) -> &StepType {
        &self.step_type
    }

    /// Returns the step category.
    #[must_use]
    pub fn category(&self) -> StepCategory {
        self.step_type.category
    }

    /// Returns the group tag (may be empty).
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the start time in epoch milliseconds.
    #[must_use]
    pub fn start_timestamp(&self) -> i64 {
        self.start_timestamp
    }

    /// Returns the start time, if it is a representable instant.
    #[must_use]
    pub fn started_at(&self) -> Option<Timestamp> {
        millis_to_datetime(self.start_timestamp)
    }

    /// Returns the retry index (0 for the first attempt).
    #[must_use]
    pub fn retry_index(&self) -> u32 {
        self.retry_index
    }

    /// Returns true if this frame is left out of fully qualified names.
    #[must_use]
    pub fn skip_expression_chain(&self) -> bool {
        self.skip_expression_chain
    }

    /// Returns the plan node type, if recorded.
    #[must_use]
    pub fn node_type(&self) -> Option<&str> {
        self.node_type.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn http_step() -> StepType {
        StepType::new("HTTP", StepCategory::Step)
    }

    #[test]
    fn test_frame_wire_shape() {
        let frame = Frame::new("step1", "r1", "s1", http_step(), 42).with_group("STEP");
        let json = serde_json::to_string(&frame).unwrap();

        assert_eq!(
            json,
            r#"{"identifier":"step1","runtimeId":"r1","setupId":"s1","stepType":{"type":"HTTP","category":"STEP"},"group":"STEP","startTimestamp":42}"#
        );
    }

    #[test]
    fn test_frame_optional_fields_round_trip() {
        let frame = Frame::new("step1", "r1", "s1", http_step(), 42)
            .with_retry_index(2)
            .with_skip_expression_chain(true)
            .with_node_type("STEP");
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains(r#""retryIndex":2"#));

        let decoded: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_frame_decodes_without_group() {
        let json = r#"{"identifier":"i","runtimeId":"r","setupId":"s","stepType":{"type":"T","category":"STAGE"},"startTimestamp":1}"#;
        let frame: Frame = serde_json::from_str(json).unwrap();

        assert_eq!(frame.group(), "");
        assert_eq!(frame.category(), StepCategory::Stage);
        assert_eq!(frame.retry_index(), 0);
        assert!(frame.node_type().is_none());
    }

    #[test]
    fn test_unknown_category_is_unrecognized() {
        let step_type: StepType =
            serde_json::from_str(r#"{"type":"X","category":"PIPELINE_ROLLBACK"}"#).unwrap();
        assert_eq!(step_type.category, StepCategory::Unrecognized);
    }

    #[test]
    fn test_frame_start_stamps_runtime_id_and_time() {
        let before = now_millis();
        let frame = Frame::start("step1", "s1", http_step());

        assert!(!frame.runtime_id().is_empty());
        assert!(frame.start_timestamp() >= before);
        assert!(frame.started_at().is_some());
        assert_ne!(frame.runtime_id(), Frame::start("step1", "s1", http_step()).runtime_id());
    }

    #[test]
    fn test_step_type_display() {
        assert_eq!(http_step().to_string(), "STEP:HTTP");
        assert_eq!(StepCategory::StepGroup.to_string(), "STEP_GROUP");
    }
}
