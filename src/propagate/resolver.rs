//! Base resolution: finding the abstract a decorator ultimately copies.
//!
//! # Algorithm
//!
//! 1. Start at the decorator.
//! 2. While the current node's base is a dot-chain link (`.b`), step back to
//!    the previous sibling: `a.b.c` is stored as the siblings `a`, `.b`, `.c`.
//!    Running out of siblings stops the walk where it is.
//! 3. Classify the base of the node the walk stopped at (the chain start):
//!    - `^`: the object two levels up
//!    - `$`: the chain start itself
//!    - otherwise the chain start if it is abstract, else whatever the
//!      [`ReferenceFinder`] returns for its base name
//! 4. Hand chain start, source and decorator to the [`AttributePropagator`].

use super::attrs::AttributePropagator;
use super::collect::AbstractIndex;
use super::finder::{LookupContext, ReferenceFinder};
use super::outcome::{ResolveOutcome, Unresolved};
use crate::base::ObjectId;
use crate::graph::ProgramGraph;
use crate::tree::{BaseRef, ObjectTree};

/// Resolves decorators against one program graph.
pub struct BaseResolver<'a> {
    graph: &'a mut ProgramGraph,
    abstracts: &'a AbstractIndex,
    finder: &'a dyn ReferenceFinder,
}

impl<'a> BaseResolver<'a> {
    pub fn new(
        graph: &'a mut ProgramGraph,
        abstracts: &'a AbstractIndex,
        finder: &'a dyn ReferenceFinder,
    ) -> Self {
        Self {
            graph,
            abstracts,
            finder,
        }
    }

    /// Resolve `decorator` and propagate the attributes of its abstract.
    pub fn resolve(&mut self, decorator: ObjectId) -> ResolveOutcome {
        let tree = self.graph.tree();
        let start = chain_start(tree, decorator);
        let source = match self.abstract_source(start) {
            Ok(source) => source,
            Err(reason) => {
                tracing::trace!("[RESOLVE] {} (chain start {}): {}", decorator, start, reason);
                return ResolveOutcome::Unresolvable(reason);
            }
        };
        tracing::trace!("[RESOLVE] {} (chain start {}) -> {}", decorator, start, source);
        AttributePropagator::new(self.graph).propagate(start, source, decorator)
    }

    /// The abstract the chain starting at `start` copies from.
    pub fn abstract_source(&self, start: ObjectId) -> Result<ObjectId, Unresolved> {
        let tree = self.graph.tree();
        match tree.base(start) {
            Some(BaseRef::Parent) => tree
                .parent(start)
                .and_then(|parent| tree.parent(parent))
                .ok_or(Unresolved::NoGrandparent),
            Some(BaseRef::Current) => Ok(start),
            _ if tree.is_abstract(start) => Ok(start),
            Some(BaseRef::Named(name) | BaseRef::Attribute(name)) => {
                let ctx = LookupContext {
                    tree,
                    abstracts: self.abstracts,
                };
                self.finder
                    .find(&ctx, start, name, tree.package(start))
                    .ok_or_else(|| Unresolved::UnknownName(name.clone()))
            }
            None => Err(Unresolved::NoBase),
        }
    }
}

/// Walk back over dot-chain links to the element the chain is applied to.
pub fn chain_start(tree: &ObjectTree, decorator: ObjectId) -> ObjectId {
    let mut current = decorator;
    while tree.base(current).is_some_and(BaseRef::is_dot_chain) {
        match tree.previous_sibling(current) {
            Some(previous) => current = previous,
            None => break,
        }
    }
    current
}
