//! Sample contexts for tests.

use crate::context::{keys, ExecutionContext, Frame, StepCategory, StepType};

/// Plan execution ID used by [`sample_context`].
pub const PLAN_EXECUTION_ID: &str = "plan-exec-1";

/// Plan ID used by [`sample_context`].
pub const PLAN_ID: &str = "plan-1";

/// Builds a frame whose runtime and setup IDs derive from `identifier`.
#[must_use]
pub fn frame(identifier: &str, step_type: &str, category: StepCategory, start: i64) -> Frame {
    Frame::new(
        identifier,
        format!("{identifier}-runtime"),
        format!("{identifier}-setup"),
        StepType::new(step_type, category),
        start,
    )
    .with_group(category.to_string())
}

/// A pipeline > stage > step group > step context with account scope.
///
/// Frame start timestamps are 1 through 4, outermost first.
#[must_use]
pub fn sample_context() -> ExecutionContext {
    ExecutionContext::new(PLAN_EXECUTION_ID)
        .with_plan_id(PLAN_ID)
        .with_setup_abstraction(keys::ACCOUNT_ID, "acc-1")
        .with_setup_abstraction(keys::ORG_IDENTIFIER, "org-1")
        .with_setup_abstraction(keys::PROJECT_IDENTIFIER, "proj-1")
        .with_frames([
            frame("pipeline", "PIPELINE_SECTION", StepCategory::Pipeline, 1),
            frame("stage1", "DEPLOYMENT", StepCategory::Stage, 2),
            frame("group1", "STEP_GROUP", StepCategory::StepGroup, 3),
            frame("step1", "HTTP", StepCategory::Step, 4),
        ])
}

/// A context that has frames for an identity-matrix strategy around a stage.
///
/// Names follow the usual `pipeline.stages.<stage>.spec.execution.steps`
/// layout, with a `parallel` wrapper and strategy frames that are left out
/// of fully qualified names.
#[must_use]
pub fn strategy_context() -> ExecutionContext {
    let step = |identifier: &str| frame(identifier, "SECTION", StepCategory::Step, 0);
    ExecutionContext::new(PLAN_EXECUTION_ID).with_frames([
        frame("pipeline", "PIPELINE_SECTION", StepCategory::Pipeline, 0),
        step("stages"),
        step(keys::PARALLEL),
        frame("stage1", "STRATEGY", StepCategory::Strategy, 0).with_skip_expression_chain(true),
        frame("stage1_1", "DEPLOYMENT", StepCategory::Stage, 0),
        step("spec"),
        step("execution"),
        frame("step1", "STRATEGY", StepCategory::Strategy, 0).with_skip_expression_chain(true),
        frame("step1_0", "HTTP", StepCategory::Step, 0),
    ])
}
