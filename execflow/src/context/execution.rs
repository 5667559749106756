//! The execution context: an immutable stack of frames plus scope-wide
//! identifiers, carried from the orchestrator to remote workers.

use super::keys;
use super::{Frame, StepCategory, StepType};
use crate::errors::{ExecflowError, Result};
use crate::observability::LogContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Account/org/project scope of an execution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NgAccess {
    /// The account ID.
    pub account_id: Option<String>,
    /// The organization identifier.
    pub org_identifier: Option<String>,
    /// The project identifier.
    pub project_identifier: Option<String>,
}

/// Where in the call tree a running unit currently is.
///
/// Frames are ordered outer to inner (pipeline, stage, step, ...); the last
/// one is the current scope. Every transformation returns a new context, so
/// branches forked from the same parent never see each other's frames.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionContext {
    plan_execution_id: String,
    #[serde(default)]
    levels: Vec<Frame>,
    #[serde(default)]
    setup_abstractions: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plan_id: Option<String>,
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl ExecutionContext {
    /// Creates a context for a plan execution with no frames.
    #[must_use]
    pub fn new(plan_execution_id: impl Into<String>) -> Self {
        Self {
            plan_execution_id: plan_execution_id.into(),
            ..Default::default()
        }
    }

    /// Sets the plan ID.
    #[must_use]
    pub fn with_plan_id(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = Some(plan_id.into());
        self
    }

    /// Adds a single setup abstraction.
    #[must_use]
    pub fn with_setup_abstraction(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.setup_abstractions.insert(key.into(), value.into());
        self
    }

    /// Adds setup abstractions.
    #[must_use]
    pub fn with_setup_abstractions(mut self, abstractions: BTreeMap<String, String>) -> Self {
        self.setup_abstractions.extend(abstractions);
        self
    }

    /// Appends frames, outermost first.
    #[must_use]
    pub fn with_frames(mut self, frames: impl IntoIterator<Item = Frame>) -> Self {
        self.levels.extend(frames);
        self
    }

    // ---------------------------------------------------------------------
    // Transformations
    // ---------------------------------------------------------------------

    /// Returns a copy keeping only the first `frames_to_keep` frames.
    ///
    /// A negative or out-of-range count keeps every frame.
    #[must_use]
    pub fn clone_keeping(&self, frames_to_keep: i64) -> Self {
        let mut cloned = self.clone();
        if let Ok(keep) = usize::try_from(frames_to_keep) {
            if keep < cloned.levels.len() {
                cloned.levels.truncate(keep);
            }
        }
        cloned
    }

    /// Returns a copy with every frame, ready to be extended by a child scope.
    #[must_use]
    pub fn clone_for_child(&self) -> Self {
        self.clone_keeping(self.frame_count())
    }

    /// Returns a copy with `frame` appended as the new current scope.
    #[must_use]
    pub fn clone_for_child_with(&self, frame: Frame) -> Self {
        let mut cloned = self.clone_for_child();
        cloned.levels.push(frame);
        cloned
    }

    /// Returns a copy without the current frame, for handing control back
    /// to the parent scope.
    #[must_use]
    pub fn clone_for_finish(&self) -> Self {
        self.clone_keeping(self.frame_count() - 1)
    }

    fn frame_count(&self) -> i64 {
        i64::try_from(self.levels.len()).unwrap_or(i64::MAX)
    }

    // ---------------------------------------------------------------------
    // Plain accessors
    // ---------------------------------------------------------------------

    /// Returns the plan execution ID.
    #[must_use]
    pub fn plan_execution_id(&self) -> &str {
        &self.plan_execution_id
    }

    /// Returns the plan ID, if set.
    #[must_use]
    pub fn plan_id(&self) -> Option<&str> {
        self.plan_id.as_deref()
    }

    /// Returns every frame, outermost first.
    #[must_use]
    pub fn levels(&self) -> &[Frame] {
        &self.levels
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns the scope-wide setup abstractions.
    #[must_use]
    pub fn setup_abstractions(&self) -> &BTreeMap<String, String> {
        &self.setup_abstractions
    }

    /// Returns a setup abstraction by key.
    #[must_use]
    pub fn setup_abstraction(&self, key: &str) -> Option<&str> {
        self.setup_abstractions.get(key).map(String::as_str)
    }

    /// Returns the account ID.
    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.setup_abstraction(keys::ACCOUNT_ID)
    }

    /// Returns the organization identifier.
    #[must_use]
    pub fn org_identifier(&self) -> Option<&str> {
        self.setup_abstraction(keys::ORG_IDENTIFIER)
    }

    /// Returns the project identifier.
    #[must_use]
    pub fn project_identifier(&self) -> Option<&str> {
        self.setup_abstraction(keys::PROJECT_IDENTIFIER)
    }

    /// Returns the account/org/project scope.
    #[must_use]
    pub fn ng_access(&self) -> NgAccess {
        NgAccess {
            account_id: self.account_id().map(String::from),
            org_identifier: self.org_identifier().map(String::from),
            project_identifier: self.project_identifier().map(String::from),
        }
    }

    // ---------------------------------------------------------------------
    // Current frame
    // ---------------------------------------------------------------------

    /// Returns the current (innermost) frame.
    #[must_use]
    pub fn current_frame(&self) -> Option<&Frame> {
        self.levels.last()
    }

    /// Returns the runtime ID of the current frame.
    #[must_use]
    pub fn current_runtime_id(&self) -> Option<&str> {
        self.current_frame().and_then(|f| non_blank(f.runtime_id()))
    }

    /// Returns the setup ID of the current frame.
    #[must_use]
    pub fn current_setup_id(&self) -> Option<&str> {
        self.current_frame().and_then(|f| non_blank(f.setup_id()))
    }

    /// Returns the identifier of the current frame.
    #[must_use]
    pub fn current_identifier(&self) -> Option<&str> {
        self.current_frame().and_then(|f| non_blank(f.identifier()))
    }

    /// Returns the step type of the current frame.
    #[must_use]
    pub fn current_step_type(&self) -> Option<&StepType> {
        self.current_frame().map(Frame::step_type)
    }

    /// Returns the group tag of the current frame.
    #[must_use]
    pub fn current_group(&self) -> Option<&str> {
        self.current_frame().and_then(|f| non_blank(f.group()))
    }

    /// Returns the node type of the current frame.
    #[must_use]
    pub fn current_node_type(&self) -> Option<&str> {
        self.current_frame().and_then(Frame::node_type)
    }

    /// Returns the start time (epoch millis) of the current frame.
    ///
    /// Unlike the other current-frame accessors this one fails on an empty
    /// stack: callers only ask for it from inside a running scope.
    pub fn current_level_start_timestamp(&self) -> Result<i64> {
        self.current_frame()
            .map(Frame::start_timestamp)
            .ok_or_else(|| ExecflowError::invalid_state("Execution context has no frames"))
    }

    // ---------------------------------------------------------------------
    // Ancestors
    // ---------------------------------------------------------------------

    /// Returns the frame directly above the current one.
    #[must_use]
    pub fn parent_frame(&self) -> Option<&Frame> {
        self.levels.len().checked_sub(2).map(|i| &self.levels[i])
    }

    /// Returns the runtime ID of the parent frame.
    #[must_use]
    pub fn parent_runtime_id(&self) -> Option<&str> {
        self.parent_frame().and_then(|f| non_blank(f.runtime_id()))
    }

    /// Returns the step type of the parent frame.
    #[must_use]
    pub fn parent_step_type(&self) -> Option<&StepType> {
        self.parent_frame().map(Frame::step_type)
    }

    fn innermost(&self, category: StepCategory) -> Option<&Frame> {
        self.levels.iter().rev().find(|f| f.category() == category)
    }

    /// Returns the innermost stage frame.
    #[must_use]
    pub fn stage_frame(&self) -> Option<&Frame> {
        self.innermost(StepCategory::Stage)
    }

    /// Returns the runtime ID of the innermost stage.
    pub fn stage_runtime_id(&self) -> Result<&str> {
        self.stage_frame()
            .map(Frame::runtime_id)
            .ok_or_else(|| ExecflowError::invalid_state("Stage not present"))
    }

    /// Returns the innermost step group frame.
    #[must_use]
    pub fn step_group_frame(&self) -> Option<&Frame> {
        self.innermost(StepCategory::StepGroup)
    }

    /// Returns the identifier of the innermost step group.
    #[must_use]
    pub fn step_group_identifier(&self) -> Option<&str> {
        self.step_group_frame().and_then(|f| non_blank(f.identifier()))
    }

    /// Returns the innermost strategy frame.
    #[must_use]
    pub fn strategy_frame(&self) -> Option<&Frame> {
        self.innermost(StepCategory::Strategy)
    }

    // ---------------------------------------------------------------------
    // Position queries
    // ---------------------------------------------------------------------

    /// Returns true if the current frame is a step.
    #[must_use]
    pub fn is_current_level_at_step(&self) -> bool {
        self.current_frame()
            .is_some_and(|f| f.category() == StepCategory::Step)
    }

    /// Returns true if any frame is a stage.
    #[must_use]
    pub fn is_current_level_inside_stage(&self) -> bool {
        self.stage_frame().is_some()
    }

    /// Returns true if an ancestor of the current frame has `step_type`.
    #[must_use]
    pub fn is_current_level_child_of_step(&self, step_type: &str) -> bool {
        let ancestors = self.levels.len().saturating_sub(1);
        self.levels[..ancestors]
            .iter()
            .any(|f| f.step_type().step_type == step_type)
    }

    /// Returns true if the current frame is a strategy wrapped directly
    /// around a stage.
    ///
    /// That is the case when the parent frame belongs to the `STAGES` group,
    /// or when the parent is a fork whose own parent belongs to it.
    #[must_use]
    pub fn is_current_strategy_level_at_stage(&self) -> bool {
        let Some(parent_index) = self.levels.len().checked_sub(2) else {
            return false;
        };
        let parent = &self.levels[parent_index];
        if parent.group() == keys::STAGES_GROUP {
            return true;
        }
        parent.category() == StepCategory::Fork
            && parent_index
                .checked_sub(1)
                .is_some_and(|i| self.levels[i].group() == keys::STAGES_GROUP)
    }

    /// Returns true if the current frame is a retry attempt.
    #[must_use]
    pub fn is_retry(&self) -> bool {
        self.current_frame().is_some_and(|f| f.retry_index() > 0)
    }

    /// Returns true if execution is inside a rollback-steps section.
    #[must_use]
    pub fn is_under_rollback_steps(&self) -> bool {
        self.levels
            .iter()
            .any(|f| f.identifier() == keys::ROLLBACK_STEPS)
    }

    /// Builds the dotted, fully qualified name of the current scope.
    ///
    /// Strategy wrappers flagged `skip_expression_chain` and the structural
    /// `parallel` wrapper are left out.
    #[must_use]
    pub fn fully_qualified_name(&self) -> String {
        self.levels
            .iter()
            .filter(|f| !f.skip_expression_chain() && f.identifier() != keys::PARALLEL)
            .map(Frame::identifier)
            .collect::<Vec<_>>()
            .join(".")
    }

    // ---------------------------------------------------------------------
    // Observability and wire
    // ---------------------------------------------------------------------

    /// Returns the flat log-correlation map for this context.
    #[must_use]
    pub fn log_context_map(&self) -> BTreeMap<String, String> {
        LogContext::from_context(self).into_map()
    }

    /// Encodes the context in its wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a context from its wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
