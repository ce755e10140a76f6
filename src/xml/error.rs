//! xml::error
//!
//! Error types for document IO, parsing, and serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading, parsing, or serializing a document.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document text is not well-formed XML.
    #[error("malformed XML in '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The document tree could not be rendered back to text.
    #[error("cannot serialize document: {0}")]
    Serialize(String),
}
