//! # attrflow
//!
//! Semantic enrichment for object program graphs: attributes of abstract
//! objects are propagated into the objects that copy them from inside other
//! objects (inner applications, or "decorators").
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → XMIR document loading (feature "interchange")
//!   ↓
//! propagate   → Decorator collection, base resolution, attribute propagation
//!   ↓
//! graph       → Program graph: nodes, attributes, derivation edges
//!   ↓
//! tree        → Object definitions, base references, navigation
//!   ↓
//! base        → Primitives (ObjectId, NodeId, markers)
//! ```
//!
//! ## Example
//!
//! ```
//! use attrflow::{NewObject, ObjectTree, ProgramGraph, propagate_inner_attrs};
//!
//! let mut tree = ObjectTree::new();
//! let a = tree.add_root("app", NewObject::named("A").abstract_object());
//! tree.add_child(a, NewObject::named("x")).unwrap();
//! let e = tree.add_root("app", NewObject::named("E"));
//! tree.add_child(e, NewObject::named("@").with_base("A")).unwrap();
//!
//! let mut graph = ProgramGraph::new(tree);
//! graph.seed_attributes(a);
//! let report = propagate_inner_attrs(&mut graph);
//!
//! let target = graph.node_for(e).unwrap();
//! assert_eq!(graph.attributes(target)[0].depth, 1);
//! assert!(report.converged);
//! ```

// ============================================================================
// MODULES (dependency order: base → tree → graph → propagate → interchange)
// ============================================================================

/// Foundation types: ids and domain constants
pub mod base;

/// Object definitions and structural navigation
pub mod tree;

/// Program graph mutated by enrichment phases
pub mod graph;

/// Inner attribute propagation
pub mod propagate;

/// Program document loading: XMIR
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use base::{NodeId, ObjectId};
pub use graph::{GraphAttr, GraphError, GraphNode, ProgramGraph};
pub use propagate::{
    InnerPropagator, PropagationConfig, PropagationReport, ReferenceFinder, propagate_inner_attrs,
};
pub use tree::{BaseRef, NewObject, ObjectDef, ObjectTree, TreeError};
