//! Attribute propagation: copying a resolved abstract's attributes into the
//! object that encloses a decorator.

use smol_str::SmolStr;

use super::outcome::{ResolveOutcome, Unresolved};
use crate::base::{NodeId, ObjectId};
use crate::graph::{GraphAttr, ProgramGraph};
use crate::tree::BaseRef;

/// Copies attributes of an abstract source into the enclosing object of the
/// node a decorator's chain starts from.
pub struct AttributePropagator<'g> {
    graph: &'g mut ProgramGraph,
}

impl<'g> AttributePropagator<'g> {
    pub fn new(graph: &'g mut ProgramGraph) -> Self {
        Self { graph }
    }

    /// Propagate from `source` into the parent of `chain_start`.
    ///
    /// For a dot-chain decorator (`a.b.c`) the source is first narrowed by
    /// following, link by link, the attribute named by each later element of
    /// the chain until the abstract named like the decorator's own link is
    /// reached. Other decorators copy straight from `source`.
    pub fn propagate(
        &mut self,
        chain_start: ObjectId,
        source: ObjectId,
        decorator: ObjectId,
    ) -> ResolveOutcome {
        let Some(source_node) = self.graph.node_for(source) else {
            return ResolveOutcome::Pending(Unresolved::SourceNotInGraph);
        };
        let abstract_node = match self.descend(chain_start, source_node, decorator) {
            Ok(node) => node,
            Err(reason) => return ResolveOutcome::Pending(reason),
        };
        let Some(parent) = self.graph.tree().parent(chain_start) else {
            return ResolveOutcome::Unresolvable(Unresolved::NoEnclosingObject);
        };

        let target = self.graph.ensure_node(parent);
        let copies: Vec<GraphAttr> = self
            .graph
            .attributes(abstract_node)
            .iter()
            .map(GraphAttr::propagated)
            .collect();
        let mut added = 0;
        for attr in copies {
            if matches!(self.graph.add_attribute(target, attr), Ok(true)) {
                added += 1;
            }
        }
        let new_edge = matches!(self.graph.connect(target, abstract_node), Ok(true));
        tracing::trace!(
            "[PROPAGATE] {} -> {}: {} attributes added, new edge: {}",
            parent,
            source,
            added,
            new_edge
        );
        ResolveOutcome::Resolved {
            target,
            source: abstract_node,
            added,
            new_edge,
        }
    }

    /// Walk from `start` down nested abstracts along the decorator's chain.
    fn descend(
        &self,
        chain_start: ObjectId,
        start: NodeId,
        decorator: ObjectId,
    ) -> Result<NodeId, Unresolved> {
        let tree = self.graph.tree();
        let Some(target_name) = tree.base(decorator).and_then(BaseRef::attribute) else {
            return Ok(start);
        };
        let target_name = SmolStr::new(target_name);

        let mut current = start;
        let mut link = tree.next_sibling(chain_start);
        while self.graph.node_name(current) != Some(target_name.as_str()) {
            let step_name = link
                .and_then(|step| tree.base(step))
                .and_then(BaseRef::attribute)
                .ok_or_else(|| Unresolved::ChainExhausted(target_name.clone()))?;
            let attr = self
                .graph
                .attributes(current)
                .iter()
                .find(|attr| tree.name(attr.object) == Some(step_name))
                .ok_or_else(|| Unresolved::MissingAttribute(SmolStr::new(step_name)))?;
            current = self
                .graph
                .node_for(attr.object)
                .ok_or(Unresolved::SourceNotInGraph)?;
            link = link.and_then(|step| tree.next_sibling(step));
        }
        Ok(current)
    }
}
