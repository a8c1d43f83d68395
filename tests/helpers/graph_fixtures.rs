//! Fixture builders for propagation tests.

use attrflow::{NewObject, ObjectId, ObjectTree, ProgramGraph};

pub const PKG: &str = "org.example";

/// Add a top-level abstract object with one named child per attribute.
pub fn abstract_root(tree: &mut ObjectTree, name: &str, attrs: &[&str]) -> ObjectId {
    let id = tree.add_root(PKG, NewObject::named(name).abstract_object());
    for attr in attrs {
        tree.add_child(id, NewObject::named(*attr)).unwrap();
    }
    id
}

/// Add a nested abstract object with one named child per attribute.
pub fn abstract_child(
    tree: &mut ObjectTree,
    parent: ObjectId,
    name: &str,
    attrs: &[&str],
) -> ObjectId {
    let id = tree
        .add_child(parent, NewObject::named(name).abstract_object())
        .unwrap();
    for attr in attrs {
        tree.add_child(id, NewObject::named(*attr)).unwrap();
    }
    id
}

/// Add a plain top-level object.
pub fn plain_root(tree: &mut ObjectTree, name: &str) -> ObjectId {
    tree.add_root(PKG, NewObject::named(name))
}

/// Add a decorator (`@`) with the given base under `parent`.
pub fn decorator(tree: &mut ObjectTree, parent: ObjectId, base: &str) -> ObjectId {
    tree.add_child(parent, NewObject::named("@").with_base(base))
        .unwrap()
}

/// Add an anonymous chain element with the given base under `parent`.
pub fn chain_head(tree: &mut ObjectTree, parent: ObjectId, base: &str) -> ObjectId {
    tree.add_child(parent, NewObject::anonymous().with_base(base))
        .unwrap()
}

/// Build a graph where each of `seeds` exposes its named children at depth 0,
/// the way global propagation leaves it.
pub fn seeded_graph(tree: ObjectTree, seeds: &[ObjectId]) -> ProgramGraph {
    let mut graph = ProgramGraph::new(tree);
    for seed in seeds {
        graph.seed_attributes(*seed);
    }
    graph
}

/// A chain `L1 .. Ln` where each `Li` is an abstract whose decorator copies
/// `L(i-1)`, and `L0` declares `x`.
///
/// With `adverse` the objects are laid out from `Ln` down to `L1`, so each
/// pass can only move `x` one level further.
pub fn dependency_chain(levels: usize, adverse: bool) -> (ProgramGraph, Vec<ObjectId>) {
    let mut tree = ObjectTree::new();
    let l0 = abstract_root(&mut tree, "L0", &["x"]);
    let mut order: Vec<usize> = (1..=levels).collect();
    if adverse {
        order.reverse();
    }
    let mut by_level = vec![l0; levels + 1];
    for level in order {
        let id = tree.add_root(PKG, NewObject::named(format!("L{level}")).abstract_object());
        decorator(&mut tree, id, &format!("L{}", level - 1));
        by_level[level] = id;
    }
    let graph = seeded_graph(tree, &[l0]);
    (graph, by_level)
}
