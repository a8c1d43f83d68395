//! Decorator and abstract collection.
//!
//! A single pass over every object definition classifies it as a decorator
//! (its name is the sentinel), an abstract definition (abstract flag plus a
//! name), both, or neither.

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;

use super::outcome::{ResolveOutcome, Unresolved};
use crate::base::{NodeId, ObjectId};
use crate::tree::ObjectTree;

// ============================================================================
// DECORATORS
// ============================================================================

/// Resolution status of a decorator across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoratorState {
    /// Not attempted yet.
    Unresolved,
    /// The last attempt propagated attributes.
    Resolved,
    /// The last attempt was blocked by graph state that may still change.
    Pending,
    /// Cannot resolve during this run; skipped by later passes.
    Unresolvable,
}

/// One decorator and its resolution status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorEntry {
    pub object: ObjectId,
    pub state: DecoratorState,
    /// Why the last attempt did not propagate.
    pub reason: Option<Unresolved>,
    /// Target and source graph nodes of the last successful attempt.
    pub link: Option<(NodeId, NodeId)>,
}

impl DecoratorEntry {
    pub fn new(object: ObjectId) -> Self {
        Self {
            object,
            state: DecoratorState::Unresolved,
            reason: None,
            link: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.state == DecoratorState::Resolved
    }

    /// Whether later passes should attempt this decorator again.
    pub fn is_retryable(&self) -> bool {
        self.state != DecoratorState::Unresolvable
    }

    /// Fold the outcome of an attempt into the entry.
    pub fn record(&mut self, outcome: &ResolveOutcome) {
        (self.state, self.link) = match outcome {
            ResolveOutcome::Resolved { target, source, .. } => {
                (DecoratorState::Resolved, Some((*target, *source)))
            }
            ResolveOutcome::Pending(_) => (DecoratorState::Pending, None),
            ResolveOutcome::Unresolvable(_) => (DecoratorState::Unresolvable, None),
        };
        self.reason = outcome.reason().cloned();
    }

    /// Demote a resolved entry whose copy is known to be incomplete.
    pub fn mark_pending(&mut self, reason: Unresolved) {
        self.state = DecoratorState::Pending;
        self.reason = Some(reason);
    }

    /// Settle a pending entry that no further pass could advance.
    pub fn mark_unresolvable(&mut self) {
        self.state = DecoratorState::Unresolvable;
    }
}

/// Inner applications that need their base resolved, in document order.
#[derive(Debug, Clone, Default)]
pub struct DecoratorIndex {
    entries: Vec<DecoratorEntry>,
}

impl DecoratorIndex {
    pub fn entries(&self) -> &[DecoratorEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [DecoratorEntry] {
        &mut self.entries
    }

    pub fn count_in(&self, state: DecoratorState) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.state == state)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// ABSTRACTS
// ============================================================================

/// Abstract definitions grouped by name.
///
/// Same-named abstracts from different packages are all kept.
#[derive(Debug, Clone, Default)]
pub struct AbstractIndex {
    by_name: IndexMap<SmolStr, IndexSet<ObjectId>>,
}

impl AbstractIndex {
    pub fn insert(&mut self, name: &str, object: ObjectId) {
        self.by_name
            .entry(SmolStr::new(name))
            .or_default()
            .insert(object);
    }

    /// Every abstract definition visible under `name`.
    pub fn get(&self, name: &str) -> impl Iterator<Item = ObjectId> + '_ {
        self.by_name
            .get(name)
            .into_iter()
            .flat_map(|objects| objects.iter().copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

// ============================================================================
// COLLECTION
// ============================================================================

/// Classify every object of `tree` in one pass.
pub fn classify(tree: &ObjectTree, sentinel: &str) -> (DecoratorIndex, AbstractIndex) {
    let mut decorators = DecoratorIndex::default();
    let mut abstracts = AbstractIndex::default();
    for (id, def) in tree.iter() {
        let Some(name) = def.name() else {
            continue;
        };
        if name == sentinel {
            decorators.entries.push(DecoratorEntry::new(id));
        }
        if def.is_abstract() {
            abstracts.insert(name, id);
        }
    }
    tracing::debug!(
        "[COLLECT] {} decorators, {} abstract names over {} objects",
        decorators.len(),
        abstracts.len(),
        tree.len()
    );
    (decorators, abstracts)
}
