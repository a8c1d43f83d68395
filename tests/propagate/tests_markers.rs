//! Marker bases: `$` copies the decorator itself, `^` copies the object two
//! levels up, and an abstract decorator is its own source.

use attrflow::propagate::{Severity, codes};
use attrflow::{NewObject, ObjectTree, propagate_inner_attrs};
use rstest::rstest;

use crate::helpers::graph_assertions::*;
use crate::helpers::graph_fixtures::*;

#[test]
fn test_self_marker_copies_decorator_attributes() {
    let mut tree = ObjectTree::new();
    let e = plain_root(&mut tree, "E");
    let deco = decorator(&mut tree, e, "$");
    tree.add_child(deco, NewObject::named("x")).unwrap();
    let mut graph = seeded_graph(tree, &[deco]);

    let report = propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, e, "x", 1);
    assert_edge(&graph, e, deco);
    assert_eq!(report.resolved, 1);
}

#[test]
fn test_self_marker_without_source_node_stalls() {
    let mut tree = ObjectTree::new();
    let e = plain_root(&mut tree, "E");
    decorator(&mut tree, e, "$");
    let mut graph = seeded_graph(tree, &[]);

    let report = propagate_inner_attrs(&mut graph);

    assert_eq!(report.unresolvable, 1);
    assert_eq!(report.pending, 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(report.diagnostics[0].severity, Severity::Warning);
    assert_eq!(
        report.diagnostics[0].code.as_deref(),
        Some(codes::STALLED_AT_FIXPOINT)
    );
}

#[test]
fn test_parent_marker_copies_grandparent() {
    let mut tree = ObjectTree::new();
    let g = plain_root(&mut tree, "G");
    tree.add_child(g, NewObject::named("w")).unwrap();
    let e = tree.add_child(g, NewObject::named("E")).unwrap();
    decorator(&mut tree, e, "^");
    let mut graph = seeded_graph(tree, &[g]);

    propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, e, "w", 1);
    assert_edge(&graph, e, g);
}

#[test]
fn test_abstract_decorator_is_its_own_source() {
    let mut tree = ObjectTree::new();
    let e = plain_root(&mut tree, "E");
    let deco = tree
        .add_child(e, NewObject::named("@").abstract_object())
        .unwrap();
    tree.add_child(deco, NewObject::named("k")).unwrap();
    let mut graph = seeded_graph(tree, &[deco]);

    propagate_inner_attrs(&mut graph);

    assert_has_attr(&graph, e, "k", 1);
    assert_edge(&graph, e, deco);
}

#[rstest]
#[case::parent_marker_at_top("^", codes::MISSING_GRANDPARENT)]
#[case::unknown_name("Nowhere", codes::UNRESOLVED_NAME)]
fn test_unresolvable_marker_reports_warning(#[case] base: &str, #[case] code: &str) {
    let mut tree = ObjectTree::new();
    let e = plain_root(&mut tree, "E");
    let deco = decorator(&mut tree, e, base);
    let mut graph = seeded_graph(tree, &[]);

    let report = propagate_inner_attrs(&mut graph);

    assert_eq!(report.unresolvable, 1);
    assert_eq!(report.pending, 0);
    assert_eq!(report.diagnostics.len(), 1);
    let diag = &report.diagnostics[0];
    assert_eq!(diag.object, deco);
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.code.as_deref(), Some(code));
}
