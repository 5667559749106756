//! Failure taxonomy.
//!
//! The engine's internal failure types, the external taxonomy they are
//! reported as, the mapping between the two, and collection of failure
//! types from an arbitrary error chain.

mod classify;
mod mapping;
mod types;

#[cfg(test)]
pub use classify::MockFailureClassifier;
pub use classify::{collect_failure_types, FailureClassifier};
pub use mapping::{to_external, to_external_set, to_internal, to_internal_set};
pub use types::{ExternalFailureType, FailureType};
