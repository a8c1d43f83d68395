//! Base references: what an object copies its attributes from.

use smol_str::SmolStr;

use crate::base::constants::{DOT_PREFIX, PARENT_MARKER, SELF_MARKER};

/// A parsed base reference.
///
/// | Source form | Variant |
/// |---|---|
/// | `^` | [`BaseRef::Parent`] |
/// | `$` | [`BaseRef::Current`] |
/// | `.name` | [`BaseRef::Attribute`] |
/// | `name` | [`BaseRef::Named`] |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseRef {
    /// The object enclosing the enclosing object.
    Parent,
    /// The object itself.
    Current,
    /// One link of a dot chain (`a.b.c`), applied to the previous sibling.
    Attribute(SmolStr),
    /// A plain identifier resolved lexically.
    Named(SmolStr),
}

impl BaseRef {
    /// Parse a raw base string. Empty strings carry no base.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw {
            PARENT_MARKER => BaseRef::Parent,
            SELF_MARKER => BaseRef::Current,
            _ => match raw.strip_prefix(DOT_PREFIX) {
                Some(attr) => BaseRef::Attribute(SmolStr::new(attr)),
                None => BaseRef::Named(SmolStr::new(raw)),
            },
        })
    }

    pub fn is_dot_chain(&self) -> bool {
        matches!(self, BaseRef::Attribute(_))
    }

    /// The attribute name of a dot-chain link, with the marker stripped.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            BaseRef::Attribute(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// The identifier of a named base.
    pub fn named(&self) -> Option<&str> {
        match self {
            BaseRef::Named(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for BaseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseRef::Parent => f.write_str(PARENT_MARKER),
            BaseRef::Current => f.write_str(SELF_MARKER),
            BaseRef::Attribute(name) => write!(f, "{DOT_PREFIX}{name}"),
            BaseRef::Named(name) => f.write_str(name),
        }
    }
}
