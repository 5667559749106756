//! # Execflow
//!
//! The execution-context and status core of a hierarchical workflow engine.
//!
//! Execflow provides:
//!
//! - **Execution context**: an immutable stack of frames (pipeline, stage,
//!   step, ...) describing where in the call tree a unit is running
//! - **Status domain**: the closed set of execution states and the named
//!   groups over it
//! - **Transition validation**: node- and plan-level predecessor tables
//! - **Aggregation**: a parent status derived from its children's statuses
//! - **Failure taxonomy**: internal and external failure types and the
//!   mapping between them
//! - **Log correlation**: structured logging fields and scoped spans
//!
//! ## Quick Start
//!
//! ```rust
//! use execflow::prelude::*;
//!
//! let ctx = ExecutionContext::new("plan-exec-1").with_frames([Frame::start(
//!     "stage1",
//!     "stage1-setup",
//!     StepType::new("DEPLOYMENT", StepCategory::Stage),
//! )]);
//!
//! let child = ctx.clone_for_child_with(Frame::start(
//!     "step1",
//!     "step1-setup",
//!     StepType::new("HTTP", StepCategory::Step),
//! ));
//! assert_eq!(child.fully_qualified_name(), "stage1.step1");
//! assert_eq!(ctx.depth(), 1);
//!
//! assert_eq!(aggregate(&[Status::Running, Status::Failed]), Status::Failed);
//! assert!(is_valid_transition(
//!     TransitionPolicy::Node,
//!     Status::Queued,
//!     Status::Running,
//! ));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod advise;
pub mod context;
pub mod errors;
pub mod failure;
pub mod observability;
pub mod status;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::advise::{is_waiting_advice, AdviseType};
    pub use crate::context::{ExecutionContext, Frame, NgAccess, StepCategory, StepType};
    pub use crate::errors::{ExecflowError, Result};
    pub use crate::failure::{
        collect_failure_types, to_external, to_internal, ExternalFailureType, FailureClassifier,
        FailureType,
    };
    pub use crate::observability::{init_tracing, LogContext, TracingConfig};
    pub use crate::status::{
        aggregate, aggregate_for_node, aggregate_for_plan, is_valid_transition, Status,
        StatusGroup, StatusSet, TransitionPolicy,
    };
    pub use crate::utils::{generate_runtime_id, now_millis, Timestamp};
}
