//! Core propagation scenarios: a decorator copies the attributes of a named
//! abstract into the object that encloses it.

use attrflow::{NewObject, ObjectTree, propagate_inner_attrs};

use crate::helpers::graph_assertions::*;
use crate::helpers::graph_fixtures::*;

#[test]
fn test_named_base_copies_into_enclosing_object() {
    let mut tree = ObjectTree::new();
    let a = abstract_root(&mut tree, "A", &["x"]);
    let e = plain_root(&mut tree, "E");
    decorator(&mut tree, e, "A");
    let mut graph = seeded_graph(tree, &[a]);

    let report = propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, e, "x", 1);
    assert_edge(&graph, e, a);
    assert_eq!(report.resolved, 1);
    assert_eq!(report.attributes_added, 1);
    assert_eq!(report.edges_added, 1);
    assert!(report.converged);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_source_attributes_keep_their_depth() {
    let mut tree = ObjectTree::new();
    let a = abstract_root(&mut tree, "A", &["x", "y"]);
    let e = plain_root(&mut tree, "E");
    decorator(&mut tree, e, "A");
    let mut graph = seeded_graph(tree, &[a]);

    propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, a, "x", 0);
    assert_has_attr(&graph, a, "y", 0);
    assert_eq!(attr_names(&graph, e), vec!["x", "y"]);
}

#[test]
fn test_decorator_inside_abstract_extends_it() {
    let mut tree = ObjectTree::new();
    let b = abstract_root(&mut tree, "B", &["y"]);
    let a = abstract_root(&mut tree, "A", &["x"]);
    decorator(&mut tree, a, "B");
    let e = plain_root(&mut tree, "E");
    decorator(&mut tree, e, "A");
    let mut graph = seeded_graph(tree, &[b, a]);

    let report = propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, a, "x", 0);
    assert_has_attr(&graph, a, "y", 1);
    assert_has_attr(&graph, e, "x", 1);
    assert_has_attr(&graph, e, "y", 2);
    assert_edge(&graph, a, b);
    assert_edge(&graph, e, a);
    assert_eq!(report.resolved, 2);
}

#[test]
fn test_target_is_superset_of_source() {
    let mut tree = ObjectTree::new();
    let b = abstract_root(&mut tree, "B", &["y", "z"]);
    let a = abstract_root(&mut tree, "A", &["x"]);
    decorator(&mut tree, a, "B");
    let e = plain_root(&mut tree, "E");
    tree.add_child(e, NewObject::named("own")).unwrap();
    decorator(&mut tree, e, "A");
    let mut graph = seeded_graph(tree, &[b, a, e]);

    propagate_inner_attrs(&mut graph);

    for (target, source) in [(a, b), (e, a)] {
        let received = attr_names(&graph, target);
        for name in attr_names(&graph, source) {
            assert!(
                received.contains(&name),
                "Expected {} to carry '{}' from {}, got {:?}",
                target,
                name,
                source,
                received
            );
        }
    }
    assert_has_attr(&graph, e, "own", 0);
    assert_no_duplicate_attrs(&graph);
}

#[test]
fn test_two_decorators_share_one_target() {
    let mut tree = ObjectTree::new();
    let a = abstract_root(&mut tree, "A", &["x"]);
    let b = abstract_root(&mut tree, "B", &["y"]);
    let e = plain_root(&mut tree, "E");
    decorator(&mut tree, e, "A");
    decorator(&mut tree, e, "B");
    let mut graph = seeded_graph(tree, &[a, b]);

    let report = propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, e, "x", 1);
    assert_has_attr(&graph, e, "y", 1);
    assert_edge(&graph, e, a);
    assert_edge(&graph, e, b);
    assert_eq!(report.edges_added, 2);
    let target = graph.node_for(e).unwrap();
    assert_eq!(graph.derived_from(target).count(), 2);
}

#[test]
fn test_nested_enclosing_object_receives_attributes() {
    let mut tree = ObjectTree::new();
    let a = abstract_root(&mut tree, "A", &["x"]);
    let outer = plain_root(&mut tree, "outer");
    let inner = tree.add_child(outer, NewObject::named("inner")).unwrap();
    decorator(&mut tree, inner, "A");
    let mut graph = seeded_graph(tree, &[a]);

    propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, inner, "x", 1);
    assert_lacks_attr(&graph, outer, "x");
}

#[test]
fn test_abstract_in_other_package_resolves_when_unique() {
    let mut tree = ObjectTree::new();
    let a = tree.add_root("lib", NewObject::named("A").abstract_object());
    tree.add_child(a, NewObject::named("x")).unwrap();
    let e = tree.add_root("app", NewObject::named("E"));
    decorator(&mut tree, e, "A");
    let mut graph = seeded_graph(tree, &[a]);

    propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, e, "x", 1);
}

#[test]
fn test_qualified_name_resolves_across_packages() {
    let mut tree = ObjectTree::new();
    let a = tree.add_root("lib.core", NewObject::named("A"));
    tree.add_child(a, NewObject::named("x")).unwrap();
    let e = tree.add_root("app", NewObject::named("E"));
    decorator(&mut tree, e, "lib.core.A");
    let mut graph = seeded_graph(tree, &[a]);

    propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, e, "x", 1);
    assert_edge(&graph, e, a);
}
