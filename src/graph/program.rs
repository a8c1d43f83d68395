//! The program graph shared by all enrichment phases.

use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::node::{GraphAttr, GraphNode};
use crate::base::constants::ROOT_PACKAGE;
use crate::base::{NodeId, ObjectId};
use crate::tree::ObjectTree;

/// Errors raised by graph mutators that take a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("unknown graph node {0}")]
    UnknownNode(NodeId),
}

/// Object definitions plus the graph nodes, attributes and derivation edges
/// computed for them.
///
/// There is at most one graph node per object definition. Derivation edges
/// point from the object that received attributes to the object they were
/// copied from, and are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProgramGraph {
    tree: ObjectTree,
    nodes: Vec<GraphNode>,
    by_object: FxHashMap<ObjectId, NodeId>,
    edges: IndexSet<(NodeId, NodeId)>,
}

impl ProgramGraph {
    pub fn new(tree: ObjectTree) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    /// The parsed object definitions (the "initial objects").
    pub fn tree(&self) -> &ObjectTree {
        &self.tree
    }

    // ========================================================================
    // NODES
    // ========================================================================

    pub fn node_for(&self, object: ObjectId) -> Option<NodeId> {
        self.by_object.get(&object).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index as u32), node))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Name of the object behind a graph node.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|node| self.tree.name(node.object()))
    }

    /// Graph node for `object`, created with an empty attribute list if absent.
    pub fn ensure_node(&mut self, object: ObjectId) -> NodeId {
        if let Some(id) = self.node_for(object) {
            return id;
        }
        let package = self
            .tree
            .get(object)
            .map(|def| def.shared_package())
            .unwrap_or_else(|| Arc::from(ROOT_PACKAGE));
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(GraphNode::new(object, package));
        self.by_object.insert(object, id);
        tracing::trace!("[GRAPH] registered {} for {}", id, object);
        id
    }

    /// Register a node for `object` whose attributes are its named children,
    /// each declared at depth 0.
    pub fn seed_attributes(&mut self, object: ObjectId) -> NodeId {
        let id = self.ensure_node(object);
        let declared: Vec<GraphAttr> = self
            .tree
            .children(object)
            .iter()
            .filter_map(|child| {
                self.tree
                    .name(*child)
                    .map(|name| GraphAttr::new(name, 0, *child))
            })
            .collect();
        let node = &mut self.nodes[id.index()];
        for attr in declared {
            node.add_attribute(attr);
        }
        id
    }

    // ========================================================================
    // ATTRIBUTES
    // ========================================================================

    pub fn attributes(&self, id: NodeId) -> &[GraphAttr] {
        self.node(id).map(GraphNode::attributes).unwrap_or_default()
    }

    /// Add an attribute unless one with the same originating object exists.
    pub fn add_attribute(&mut self, id: NodeId, attr: GraphAttr) -> Result<bool, GraphError> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(GraphError::UnknownNode(id))?;
        Ok(node.add_attribute(attr))
    }

    // ========================================================================
    // EDGES
    // ========================================================================

    /// Record that `from` derives attributes from `to`. Returns whether the
    /// edge is new.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<bool, GraphError> {
        for id in [from, to] {
            if self.node(id).is_none() {
                return Err(GraphError::UnknownNode(id));
            }
        }
        Ok(self.edges.insert((from, to)))
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains(&(from, to))
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges.iter().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes that `from` derives attributes from.
    pub fn derived_from(&self, from: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .iter()
            .filter(move |(source, _)| *source == from)
            .map(|(_, target)| *target)
    }
}
