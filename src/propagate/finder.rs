//! Reference finding: turning a base name into the definition it denotes.
//!
//! Resolution of plain names is delegated through the [`ReferenceFinder`]
//! trait so that hosts can plug in their own visibility rules. The default
//! [`LexicalFinder`] walks scopes outward the same way name lookup works in
//! source: nearest enclosing object first, then the package, then a
//! package-qualified name, then the abstract index.

use super::collect::AbstractIndex;
use crate::base::ObjectId;
use crate::base::constants::PACKAGE_SEPARATOR;
use crate::tree::ObjectTree;

/// What a finder may look at.
#[derive(Clone, Copy, Debug)]
pub struct LookupContext<'a> {
    /// Every object definition of the program.
    pub tree: &'a ObjectTree,
    /// Abstract definitions by name.
    pub abstracts: &'a AbstractIndex,
}

/// Resolves a base name, seen from `from`, to an object definition.
pub trait ReferenceFinder {
    fn find(
        &self,
        ctx: &LookupContext<'_>,
        from: ObjectId,
        name: &str,
        package: &str,
    ) -> Option<ObjectId>;
}

impl<F> ReferenceFinder for F
where
    F: Fn(&LookupContext<'_>, ObjectId, &str, &str) -> Option<ObjectId>,
{
    fn find(
        &self,
        ctx: &LookupContext<'_>,
        from: ObjectId,
        name: &str,
        package: &str,
    ) -> Option<ObjectId> {
        self(ctx, from, name, package)
    }
}

/// Scope-walking finder used when the host does not supply one.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexicalFinder;

impl LexicalFinder {
    /// Nearest enclosing object declaring `name`.
    fn in_enclosing_scopes(tree: &ObjectTree, from: ObjectId, name: &str) -> Option<ObjectId> {
        tree.ancestors(from).find_map(|scope| {
            tree.child_named(scope, name)
                .filter(|candidate| *candidate != from)
        })
    }

    /// Top-level object named `name` in `package`.
    fn in_package(tree: &ObjectTree, package: &str, name: &str) -> Option<ObjectId> {
        tree.roots()
            .iter()
            .copied()
            .find(|root| tree.name(*root) == Some(name) && tree.package(*root) == package)
    }

    /// Abstract named `name`: the one in `package`, otherwise the only one.
    fn in_abstracts(ctx: &LookupContext<'_>, package: &str, name: &str) -> Option<ObjectId> {
        let candidates: Vec<ObjectId> = ctx.abstracts.get(name).collect();
        let mut local = candidates
            .iter()
            .copied()
            .filter(|candidate| ctx.tree.package(*candidate) == package);
        match (local.next(), local.next()) {
            (Some(found), None) => return Some(found),
            (Some(_), Some(_)) => return None,
            _ => {}
        }
        match candidates.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl ReferenceFinder for LexicalFinder {
    fn find(
        &self,
        ctx: &LookupContext<'_>,
        from: ObjectId,
        name: &str,
        package: &str,
    ) -> Option<ObjectId> {
        let tree = ctx.tree;
        if let Some(found) = Self::in_enclosing_scopes(tree, from, name) {
            tracing::trace!("[FIND] '{}' from {} -> {} (enclosing scope)", name, from, found);
            return Some(found);
        }
        if let Some(found) = Self::in_package(tree, package, name) {
            tracing::trace!("[FIND] '{}' -> {} (package '{}')", name, found, package);
            return Some(found);
        }
        if let Some((qualifier, simple)) = name.rsplit_once(PACKAGE_SEPARATOR) {
            if let Some(found) = Self::in_package(tree, qualifier, simple) {
                tracing::trace!("[FIND] '{}' -> {} (qualified)", name, found);
                return Some(found);
            }
        }
        let found = Self::in_abstracts(ctx, package, name);
        if found.is_none() {
            tracing::trace!("[FIND] '{}' from {} not found", name, from);
        }
        found
    }
}
