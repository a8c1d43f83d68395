//! Foundation types for the propagation toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ObjectId`] - Index of an object definition in an [`ObjectTree`](crate::tree::ObjectTree)
//! - [`NodeId`] - Index of a graph node in a [`ProgramGraph`](crate::graph::ProgramGraph)
//! - Domain constants (base reference markers, decorator sentinel, pass budget)
//!
//! This module has NO dependencies on other attrflow modules.

pub mod constants;
mod ids;

pub use ids::{NodeId, ObjectId};
