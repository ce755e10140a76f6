//! xml
//!
//! A small mutable XML tree for inventory feed documents.
//!
//! # Modules
//!
//! - [`tree`] - Owned document tree: [`Document`], [`Element`], [`XmlNode`]
//! - [`parse`] - Event-based construction from text via quick-xml
//! - [`write`] - Indented serialization back to text
//! - [`error`] - Error types for load/parse/serialize failures
//!
//! # Design
//!
//! The tree is a plain owned recursive structure rather than an arena or a
//! borrowed zero-copy view. The feeds this crate handles are small, and the
//! merge operation relocates elements between two live documents, which an
//! owned tree expresses as ordinary `Vec` moves. Namespaces, DTDs, and
//! streaming are out of scope.

pub mod error;
pub mod parse;
pub mod tree;
pub mod write;

pub use error::XmlError;
pub use tree::{Document, Element, XmlNode};
