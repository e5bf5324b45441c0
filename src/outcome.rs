//! Catch-and-degrade results for engine entry points
//!
//! No fault inside the engine may abort an edit. Entry points that can fail
//! return an [`Outcome`] instead of a `Result`: either the computed value, or
//! the error that caused the formatting step to be skipped. Skips are logged
//! when they are produced, so callers are free to ignore them.

use crate::error::{EngineError, Result};

/// Result of an engine entry point
#[derive(Debug)]
#[must_use]
pub enum Outcome<T> {
    /// The step ran to completion
    Computed(T),
    /// The step faulted and left the document untouched from that point on
    Skipped(EngineError),
}

impl<T> Outcome<T> {
    /// Convert an internal result, logging the fault under `context`
    pub fn from_result(result: Result<T>, context: &str) -> Self {
        match result {
            Ok(value) => Outcome::Computed(value),
            Err(err) => {
                tracing::error!(context, error = %err, "edit step skipped");
                Outcome::Skipped(err)
            }
        }
    }

    /// Check whether the step completed
    pub fn is_computed(&self) -> bool {
        matches!(self, Outcome::Computed(_))
    }

    /// Check whether the step was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }

    /// Get the computed value, if any
    pub fn computed(self) -> Option<T> {
        match self {
            Outcome::Computed(value) => Some(value),
            Outcome::Skipped(_) => None,
        }
    }

    /// Get the fault, if the step was skipped
    pub fn skipped(&self) -> Option<&EngineError> {
        match self {
            Outcome::Computed(_) => None,
            Outcome::Skipped(err) => Some(err),
        }
    }

    /// Get the computed value or a fallback
    pub fn unwrap_or(self, fallback: T) -> T {
        self.computed().unwrap_or(fallback)
    }

    /// Map the computed value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Computed(value) => Outcome::Computed(f(value)),
            Outcome::Skipped(err) => Outcome::Skipped(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ok() {
        let outcome = Outcome::from_result(Ok(3), "test");
        assert!(outcome.is_computed());
        assert_eq!(outcome.computed(), Some(3));
    }

    #[test]
    fn test_from_err() {
        let outcome: Outcome<usize> =
            Outcome::from_result(Err(EngineError::Message("boom".into())), "test");
        assert!(outcome.is_skipped());
        assert_eq!(outcome.skipped().map(|e| e.to_string()), Some("boom".to_string()));
        assert_eq!(outcome.unwrap_or(0), 0);
    }

    #[test]
    fn test_map() {
        let outcome = Outcome::Computed(2).map(|n| n * 10);
        assert_eq!(outcome.computed(), Some(20));
    }
}
