//! Graph nodes and their attribute lists.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::ObjectId;

/// One attribute visible on a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphAttr {
    /// Symbolic name of the attribute.
    pub name: SmolStr,
    /// Number of propagation steps from the declaring object (0 = declared here).
    pub depth: u32,
    /// The object definition that declares the attribute.
    pub object: ObjectId,
}

impl GraphAttr {
    pub fn new(name: impl Into<SmolStr>, depth: u32, object: ObjectId) -> Self {
        Self {
            name: name.into(),
            depth,
            object,
        }
    }

    /// The same attribute one propagation step further away.
    pub fn propagated(&self) -> Self {
        Self {
            name: self.name.clone(),
            depth: self.depth + 1,
            object: self.object,
        }
    }
}

/// A participating object definition and the attributes it exposes.
#[derive(Debug, Clone)]
pub struct GraphNode {
    object: ObjectId,
    package: Arc<str>,
    attributes: Vec<GraphAttr>,
}

impl GraphNode {
    pub(crate) fn new(object: ObjectId, package: Arc<str>) -> Self {
        Self {
            object,
            package,
            attributes: Vec::new(),
        }
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn attributes(&self) -> &[GraphAttr] {
        &self.attributes
    }

    /// Attribute declared by `object`, if present.
    pub fn attribute_from(&self, object: ObjectId) -> Option<&GraphAttr> {
        self.attributes.iter().find(|attr| attr.object == object)
    }

    /// Append `attr` unless an attribute with the same originating object is
    /// already present. Returns whether it was added.
    pub(crate) fn add_attribute(&mut self, attr: GraphAttr) -> bool {
        if self.attribute_from(attr.object).is_some() {
            return false;
        }
        self.attributes.push(attr);
        true
    }
}
