//! Execution context for plan execution.
//!
//! This module provides:
//! - Frames describing one nesting level of a running execution
//! - The immutable frame stack passed from the orchestrator to workers
//! - Well-known setup-abstraction keys

mod execution;
mod frame;
pub mod keys;

pub use execution::{ExecutionContext, NgAccess};
pub use frame::{Frame, StepCategory, StepType};
