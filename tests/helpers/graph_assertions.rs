//! Graph assertion helpers for propagation tests.

use attrflow::{GraphAttr, ObjectId, ProgramGraph};

/// Attributes of the graph node for `object` (empty if it has none).
pub fn attrs_of(graph: &ProgramGraph, object: ObjectId) -> Vec<GraphAttr> {
    graph
        .node_for(object)
        .map(|node| graph.attributes(node).to_vec())
        .unwrap_or_default()
}

/// Attribute names of the graph node for `object`, in order.
pub fn attr_names(graph: &ProgramGraph, object: ObjectId) -> Vec<String> {
    attrs_of(graph, object)
        .iter()
        .map(|attr| attr.name.to_string())
        .collect()
}

/// Assert `object` exposes an attribute `name` at `depth`.
pub fn assert_has_attr(graph: &ProgramGraph, object: ObjectId, name: &str, depth: u32) {
    let attrs = attrs_of(graph, object);
    assert!(
        attrs.iter().any(|attr| attr.name == name && attr.depth == depth),
        "Expected {} to have attribute '{}' at depth {}, got {:?}",
        object,
        name,
        depth,
        attrs
    );
}

/// Assert `object` has no attribute called `name`.
pub fn assert_lacks_attr(graph: &ProgramGraph, object: ObjectId, name: &str) {
    let attrs = attrs_of(graph, object);
    assert!(
        attrs.iter().all(|attr| attr.name != name),
        "Expected {} not to have attribute '{}', got {:?}",
        object,
        name,
        attrs
    );
}

/// Assert a derivation edge `from → to` between the nodes of two objects.
pub fn assert_edge(graph: &ProgramGraph, from: ObjectId, to: ObjectId) {
    let from_node = graph
        .node_for(from)
        .unwrap_or_else(|| panic!("Expected {} to have a graph node", from));
    let to_node = graph
        .node_for(to)
        .unwrap_or_else(|| panic!("Expected {} to have a graph node", to));
    assert!(
        graph.has_edge(from_node, to_node),
        "Expected derivation edge {} -> {}",
        from,
        to
    );
}

/// Assert no graph node holds two attributes from the same object.
pub fn assert_no_duplicate_attrs(graph: &ProgramGraph) {
    for (id, node) in graph.nodes() {
        let mut seen = std::collections::HashSet::new();
        for attr in node.attributes() {
            if !seen.insert(attr.object) {
                panic!("Duplicate attribute from {} on {}", attr.object, id);
            }
        }
    }
}
