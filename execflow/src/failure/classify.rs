//! Collecting failure types from an error chain.

use super::{to_internal_set, ExternalFailureType, FailureType};
use std::collections::BTreeSet;
use std::error::Error;

/// Classifies a single error into the external failure types it raises.
///
/// Implemented by whatever error classification the surrounding system has.
/// Any `Fn(&(dyn Error + 'static)) -> BTreeSet<ExternalFailureType>` closure
/// is a classifier.
#[cfg_attr(test, mockall::automock)]
pub trait FailureClassifier {
    /// Returns the failure types raised by `error` itself, ignoring its
    /// sources.
    fn classify(&self, error: &(dyn Error + 'static)) -> BTreeSet<ExternalFailureType>;
}

impl<F> FailureClassifier for F
where
    F: Fn(&(dyn Error + 'static)) -> BTreeSet<ExternalFailureType>,
{
    fn classify(&self, error: &(dyn Error + 'static)) -> BTreeSet<ExternalFailureType> {
        self(error)
    }
}

/// Collects the internal failure types raised anywhere in `error`'s source
/// chain.
#[must_use]
pub fn collect_failure_types<C>(error: &(dyn Error + 'static), classifier: &C) -> BTreeSet<FailureType>
where
    C: FailureClassifier + ?Sized,
{
    let mut raised = BTreeSet::new();
    let mut current = Some(error);
    while let Some(err) = current {
        raised.extend(classifier.classify(err));
        current = err.source();
    }
    to_internal_set(&raised)
}
