//! inventory::document
//!
//! An inventory feed document bound to its source path.
//!
//! The path travels with the document so that errors raised deep in the
//! update flow can name the file the operator pointed the tool at.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::inventory::{PRODUCT_ID_ATTR, RECORDS_TAG, RECORD_TAG};
use crate::xml::{Document, Element, XmlError};

/// Errors from loading or writing an inventory feed.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// The document parsed but holds no `records` container.
    #[error("no <records> container in '{}'", path.display())]
    NoRecords { path: PathBuf },
}

/// An inventory feed: a parsed document plus the path it came from.
#[derive(Debug, Clone)]
pub struct Inventory {
    doc: Document,
    path: PathBuf,
}

impl Inventory {
    /// Read and parse a feed file. Fails if the file is unreadable, the XML
    /// is malformed, or the document has no `records` container.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let doc = Document::load(path)?;
        Self::from_document(doc, path.to_path_buf())
    }

    /// Parse a feed from text. `origin` is the path reported in errors.
    pub fn parse_str(text: &str, origin: impl Into<PathBuf>) -> Result<Self, InventoryError> {
        let path = origin.into();
        let doc = Document::parse_str(text, &path)?;
        Self::from_document(doc, path)
    }

    fn from_document(doc: Document, path: PathBuf) -> Result<Self, InventoryError> {
        if doc.root().first_descendant(RECORDS_TAG).is_none() {
            return Err(InventoryError::NoRecords { path });
        }
        Ok(Self { doc, path })
    }

    /// The path this feed was loaded from (or labeled with).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `records` container element.
    ///
    /// Presence is checked at construction, so this only fails if the
    /// container was since removed through [`Inventory::document_mut`].
    pub fn records_container(&self) -> Result<&Element, InventoryError> {
        self.doc
            .root()
            .first_descendant(RECORDS_TAG)
            .ok_or_else(|| InventoryError::NoRecords {
                path: self.path.clone(),
            })
    }

    /// Mutable variant of [`Inventory::records_container`].
    pub fn records_container_mut(&mut self) -> Result<&mut Element, InventoryError> {
        let path = self.path.clone();
        self.doc
            .root_mut()
            .first_descendant_mut(RECORDS_TAG)
            .ok_or(InventoryError::NoRecords { path })
    }

    /// The feed's records in document order.
    pub fn records(&self) -> impl Iterator<Item = &Element> {
        self.doc
            .root()
            .first_descendant(RECORDS_TAG)
            .into_iter()
            .flat_map(|container| {
                container
                    .child_elements()
                    .filter(|elem| elem.name() == RECORD_TAG)
            })
    }

    /// Product IDs of the feed's records in document order.
    pub fn product_ids(&self) -> Vec<&str> {
        self.records().map(product_id).collect()
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access to the underlying document.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Render the feed as indented XML text.
    pub fn serialize(&self) -> Result<String, InventoryError> {
        Ok(self.doc.serialize()?)
    }

    /// Serialize and overwrite the feed's own file.
    pub fn write(&self) -> Result<(), InventoryError> {
        let text = self.serialize()?;
        std::fs::write(&self.path, text).map_err(|source| XmlError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// A record's product ID. Records without the attribute are treated as
/// having an empty ID; they sort first and match no non-empty prefix.
pub fn product_id(record: &Element) -> &str {
    record.attribute(PRODUCT_ID_ATTR).unwrap_or("")
}
