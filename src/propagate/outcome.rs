//! Outcome of a single propagation attempt.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::NodeId;

/// Why an attempt did not propagate anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Unresolved {
    #[error("base `{0}` does not name a visible object")]
    UnknownName(SmolStr),
    #[error("object has no base to copy from")]
    NoBase,
    #[error("parent marker `^` needs an object two levels up")]
    NoGrandparent,
    #[error("object has no enclosing object to receive attributes")]
    NoEnclosingObject,
    #[error("abstract source has no graph node yet")]
    SourceNotInGraph,
    #[error("no attribute `{0}` on the current abstract")]
    MissingAttribute(SmolStr),
    #[error("dot chain ended before reaching attribute `{0}`")]
    ChainExhausted(SmolStr),
    #[error("abstract source was still receiving attributes when the pass budget ran out")]
    SourceIncomplete,
}

/// Result of resolving one decorator and propagating its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Attributes of `source` were copied into `target`; `added` counts the
    /// new ones.
    Resolved {
        target: NodeId,
        source: NodeId,
        added: usize,
        new_edge: bool,
    },
    /// Nothing happened yet; a later pass may succeed once more of the
    /// graph is filled in.
    Pending(Unresolved),
    /// Nothing can happen during this run: the object tree never changes.
    Unresolvable(Unresolved),
}

impl ResolveOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolveOutcome::Resolved { .. })
    }

    /// Whether the attempt mutated the graph.
    pub fn changed_graph(&self) -> bool {
        match self {
            ResolveOutcome::Resolved { added, new_edge, .. } => *added > 0 || *new_edge,
            _ => false,
        }
    }

    pub fn reason(&self) -> Option<&Unresolved> {
        match self {
            ResolveOutcome::Resolved { .. } => None,
            ResolveOutcome::Pending(reason) | ResolveOutcome::Unresolvable(reason) => Some(reason),
        }
    }
}
