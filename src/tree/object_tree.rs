//! Arena of parsed object definitions with structural navigation.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;

use super::base_ref::BaseRef;
use crate::base::ObjectId;

/// Errors raised while building an [`ObjectTree`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("unknown parent object {0}")]
    UnknownParent(ObjectId),
}

// ============================================================================
// OBJECT DEFINITION
// ============================================================================

/// One parsed object literal.
#[derive(Debug, Clone)]
pub struct ObjectDef {
    name: Option<SmolStr>,
    base: Option<BaseRef>,
    is_abstract: bool,
    package: Arc<str>,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
    /// Position among the parent's children (or among the roots).
    position: usize,
}

impl ObjectDef {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn base(&self) -> Option<&BaseRef> {
        self.base.as_ref()
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub(crate) fn shared_package(&self) -> Arc<str> {
        Arc::clone(&self.package)
    }

    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }
}

/// Description of an object to insert into an [`ObjectTree`].
#[derive(Debug, Clone, Default)]
pub struct NewObject {
    pub name: Option<SmolStr>,
    pub base: Option<BaseRef>,
    pub is_abstract: bool,
}

impl NewObject {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the base from its source form (`^`, `$`, `.attr` or a name).
    pub fn with_base(mut self, raw: &str) -> Self {
        self.base = BaseRef::parse(raw);
        self
    }

    pub fn abstract_object(mut self) -> Self {
        self.is_abstract = true;
        self
    }
}

// ============================================================================
// OBJECT TREE
// ============================================================================

/// Every object definition of a program, in document order.
///
/// The tree only stores objects: sibling navigation moves between logical
/// elements and never has to skip over formatting nodes.
#[derive(Debug, Clone, Default)]
pub struct ObjectTree {
    objects: Vec<ObjectDef>,
    roots: Vec<ObjectId>,
    packages: FxHashSet<Arc<str>>,
}

impl ObjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level object in `package`.
    pub fn add_root(&mut self, package: &str, object: NewObject) -> ObjectId {
        let package = self.intern_package(package);
        let id = self.next_id();
        let position = self.roots.len();
        self.objects.push(Self::def(object, package, None, position));
        self.roots.push(id);
        id
    }

    /// Add `object` as the last child of `parent`. The child inherits the
    /// parent's package.
    pub fn add_child(
        &mut self,
        parent: ObjectId,
        object: NewObject,
    ) -> Result<ObjectId, TreeError> {
        let id = self.next_id();
        let parent_def = self
            .objects
            .get_mut(parent.index())
            .ok_or(TreeError::UnknownParent(parent))?;
        let package = Arc::clone(&parent_def.package);
        let position = parent_def.children.len();
        parent_def.children.push(id);
        self.objects.push(Self::def(object, package, Some(parent), position));
        Ok(id)
    }

    fn def(
        object: NewObject,
        package: Arc<str>,
        parent: Option<ObjectId>,
        position: usize,
    ) -> ObjectDef {
        ObjectDef {
            name: object.name,
            base: object.base,
            is_abstract: object.is_abstract,
            package,
            parent,
            children: Vec::new(),
            position,
        }
    }

    fn next_id(&self) -> ObjectId {
        ObjectId::new(self.objects.len() as u32)
    }

    fn intern_package(&mut self, package: &str) -> Arc<str> {
        if let Some(existing) = self.packages.get(package) {
            return Arc::clone(existing);
        }
        let interned: Arc<str> = Arc::from(package);
        self.packages.insert(Arc::clone(&interned));
        interned
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn get(&self, id: ObjectId) -> Option<&ObjectDef> {
        self.objects.get(id.index())
    }

    pub fn name(&self, id: ObjectId) -> Option<&str> {
        self.get(id).and_then(ObjectDef::name)
    }

    pub fn base(&self, id: ObjectId) -> Option<&BaseRef> {
        self.get(id).and_then(ObjectDef::base)
    }

    pub fn is_abstract(&self, id: ObjectId) -> bool {
        self.get(id).is_some_and(ObjectDef::is_abstract)
    }

    /// Package of the object, or the empty root package for unknown ids.
    pub fn package(&self, id: ObjectId) -> &str {
        self.get(id).map(ObjectDef::package).unwrap_or_default()
    }

    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.get(id).and_then(ObjectDef::parent)
    }

    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.get(id).map(ObjectDef::children).unwrap_or_default()
    }

    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    /// The objects sharing `id`'s parent (the roots for a top-level object).
    fn siblings(&self, def: &ObjectDef) -> &[ObjectId] {
        match def.parent {
            Some(parent) => self.children(parent),
            None => &self.roots,
        }
    }

    /// The logically preceding sibling.
    pub fn previous_sibling(&self, id: ObjectId) -> Option<ObjectId> {
        let def = self.get(id)?;
        let position = def.position.checked_sub(1)?;
        self.siblings(def).get(position).copied()
    }

    /// The logically following sibling.
    pub fn next_sibling(&self, id: ObjectId) -> Option<ObjectId> {
        let def = self.get(id)?;
        self.siblings(def).get(def.position + 1).copied()
    }

    /// Enclosing objects from the direct parent outward.
    pub fn ancestors(&self, id: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// Direct child of `scope` with the given name.
    pub fn child_named(&self, scope: ObjectId, name: &str) -> Option<ObjectId> {
        self.children(scope)
            .iter()
            .copied()
            .find(|child| self.name(*child) == Some(name))
    }

    /// All objects in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &ObjectDef)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, def)| (ObjectId::new(index as u32), def))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
