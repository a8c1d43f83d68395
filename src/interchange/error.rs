//! Error types for interchange operations.

use thiserror::Error;

use crate::tree::TreeError;

/// Errors that can occur while loading a program document.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required element or attribute.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// The document describes a tree that cannot be built.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl InterchangeError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a missing element error.
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }
}
