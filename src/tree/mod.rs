//! Object definitions: the parsed program as a navigable tree.
//!
//! The tree is produced by an external parser (or by the XMIR reader in
//! `interchange`) and is read-only while attributes propagate.
//!
//! ## Key Types
//!
//! - [`ObjectTree`]: arena of definitions with parent/sibling navigation
//! - [`ObjectDef`]: one object literal (name, base, abstract flag, package)
//! - [`BaseRef`]: parsed base reference (`^`, `$`, `.attr`, `name`)

mod base_ref;
mod object_tree;

pub use base_ref::BaseRef;
pub use object_tree::{NewObject, ObjectDef, ObjectTree, TreeError};
