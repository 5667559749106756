//! Observability utilities.
//!
//! Correlation fields for structured logs, scoped `tracing` spans built from
//! an execution context, and subscriber installation.

mod log_context;
mod subscriber;

pub use log_context::{keys, LogContext};
pub use subscriber::{init_tracing, TracingConfig};
