//! Testing utilities for code built on execflow.
//!
//! This module provides:
//! - Sample execution contexts
//! - In-memory capture of `tracing` output

mod fixtures;
mod logs;

pub use fixtures::{frame, sample_context, strategy_context, PLAN_EXECUTION_ID, PLAN_ID};
pub use logs::{capture_logs, CapturedLogs};
