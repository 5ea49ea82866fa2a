//! Error types for declaration parsing and graph construction.

use thiserror::Error;

/// Error type for declaration parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid document structure.
    #[error("invalid declaration structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// castxml could not be run or reported a failure.
    #[error("castxml ({program}) failed: {message}")]
    Castxml {
        /// Program that was invoked.
        program: String,
        /// Failure description, usually castxml's stderr.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for declaration graph construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A referenced type identifier is not defined anywhere in the graph.
    #[error("unresolved type '{id}' referenced by {context}")]
    UnresolvedType {
        /// Type identifier.
        id: String,
        /// Where the reference was found.
        context: String,
    },

    /// The same identifier was declared twice.
    #[error("duplicate type identifier '{id}'")]
    DuplicateId {
        /// Type identifier.
        id: String,
    },

    /// Circular type reference.
    #[error("circular type reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates an unresolved type error.
    pub fn unresolved(id: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnresolvedType {
            id: id.into(),
            context: context.into(),
        }
    }
}
