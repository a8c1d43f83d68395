//! Repeated runs over an already propagated graph change nothing.

use attrflow::{ObjectTree, propagate_inner_attrs};

use crate::helpers::graph_assertions::*;
use crate::helpers::graph_fixtures::*;

#[test]
fn test_second_run_adds_nothing() {
    let mut tree = ObjectTree::new();
    let b = abstract_root(&mut tree, "B", &["y"]);
    let a = abstract_root(&mut tree, "A", &["x"]);
    decorator(&mut tree, a, "B");
    let e = plain_root(&mut tree, "E");
    decorator(&mut tree, e, "A");
    let mut graph = seeded_graph(tree, &[b, a]);

    let first = propagate_inner_attrs(&mut graph);
    let attrs_after_first = attrs_of(&graph, e);
    let edges_after_first = graph.edge_count();
    let second = propagate_inner_attrs(&mut graph);

    assert!(first.attributes_added > 0);
    assert_eq!(second.attributes_added, 0);
    assert_eq!(second.edges_added, 0);
    assert_eq!(second.passes, 1);
    assert!(second.converged);
    assert_eq!(attrs_of(&graph, e), attrs_after_first);
    assert_eq!(graph.edge_count(), edges_after_first);
}

#[test]
fn test_incomplete_run_resumes_where_it_stopped() {
    let (mut graph, by_level) = dependency_chain(8, true);

    let first = propagate_inner_attrs(&mut graph);
    assert!(!first.converged);
    assert_lacks_attr(&graph, by_level[8], "x");

    let second = propagate_inner_attrs(&mut graph);
    assert!(second.converged);
    assert_has_attr(&graph, by_level[8], "x", 8);
    assert_no_duplicate_attrs(&graph);
}
