//! Program graph: graph nodes, attributes and derivation edges.
//!
//! The graph is filled by earlier phases (parsing, global propagation) and
//! mutated in place by [`crate::propagate`].

mod node;
mod program;

pub use node::{GraphAttr, GraphNode};
pub use program::{GraphError, ProgramGraph};
