//! Statement validators: per-item sign conventions, whole-statement
//! arithmetic, and reclassification transitions. All validators are pure
//! and synchronous; failures are reported as data, never raised.

pub mod arithmetic;
pub mod sign;
pub mod transition;

pub use arithmetic::ArithmeticValidator;
pub use sign::SignValidator;
pub use transition::{TransitionDecision, TransitionValidator};

use serde::{Deserialize, Serialize};

use crate::statement::{Severity, Violation};

/// Outcome of a single validation call. Ephemeral: callers fold the
/// violations into the statement's correction log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self::default()
    }

    /// Valid means no error-severity findings; warnings do not invalidate
    /// a statement.
    pub fn is_valid(&self) -> bool {
        !self
            .violations
            .iter()
            .any(|violation| violation.severity == Severity::Error)
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn errors(&self) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|violation| violation.severity == Severity::Error)
            .map(|violation| violation.message.as_str())
            .collect()
    }

    pub fn suggestions(&self) -> Vec<&str> {
        self.violations
            .iter()
            .filter_map(|violation| violation.suggestion.as_deref())
            .collect()
    }
}
