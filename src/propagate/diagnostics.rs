//! Diagnostics: reporting decorators that did not propagate.
//!
//! Propagation never fails; these diagnostics only describe what was left
//! incomplete so that callers can surface it.

use std::sync::Arc;

use super::outcome::Unresolved;
use crate::base::ObjectId;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Info,
}

/// A diagnostic attached to an object definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The decorator the diagnostic is about.
    pub object: ObjectId,
    pub severity: Severity,
    /// Diagnostic code (e.g., "P0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn warning(object: ObjectId, message: impl Into<Arc<str>>) -> Self {
        Self {
            object,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
        }
    }

    pub fn info(object: ObjectId, message: impl Into<Arc<str>>) -> Self {
        Self {
            object,
            severity: Severity::Info,
            code: None,
            message: message.into(),
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Codes for decorators left without their attributes.
pub mod codes {
    /// Base name does not resolve to any object.
    pub const UNRESOLVED_NAME: &str = "P0001";
    /// Parent marker used where there is no object two levels up.
    pub const MISSING_GRANDPARENT: &str = "P0002";
    /// Decorator (or the start of its chain) has nowhere to copy into.
    pub const NO_ENCLOSING_OBJECT: &str = "P0003";
    /// Decorator still waiting on other decorators when the pass budget ran out.
    pub const PASS_BUDGET_EXHAUSTED: &str = "P0004";
    /// Decorator blocked on graph state that a converged run never produced.
    pub const STALLED_AT_FIXPOINT: &str = "P0005";
}

/// Diagnostic for a decorator that can never propagate in this run.
pub(crate) fn unresolvable(object: ObjectId, reason: &Unresolved) -> Diagnostic {
    let code = match reason {
        Unresolved::NoGrandparent => codes::MISSING_GRANDPARENT,
        Unresolved::NoEnclosingObject => codes::NO_ENCLOSING_OBJECT,
        Unresolved::UnknownName(_) | Unresolved::NoBase => codes::UNRESOLVED_NAME,
        Unresolved::SourceNotInGraph
        | Unresolved::MissingAttribute(_)
        | Unresolved::ChainExhausted(_)
        | Unresolved::SourceIncomplete => codes::STALLED_AT_FIXPOINT,
    };
    Diagnostic::warning(object, format!("decorator {object} left unresolved: {reason}"))
        .with_code(code)
}

/// Diagnostic for a decorator still pending when the pass budget ran out.
pub(crate) fn budget_exhausted(
    object: ObjectId,
    passes: usize,
    reason: Option<&Unresolved>,
) -> Diagnostic {
    let detail = reason
        .map(|reason| format!(": {reason}"))
        .unwrap_or_default();
    Diagnostic::info(
        object,
        format!(
            "decorator {object} still pending after {}{detail}",
            pass_count(passes)
        ),
    )
    .with_code(codes::PASS_BUDGET_EXHAUSTED)
}

/// `1 pass`, `6 passes`.
pub(crate) fn pass_count(passes: usize) -> String {
    match passes {
        1 => "1 pass".to_string(),
        n => format!("{n} passes"),
    }
}
