//! xml::tree
//!
//! Owned mutable XML tree.
//!
//! # Types
//!
//! - [`Document`] - A parsed file: optional XML declaration plus one root
//!   element
//! - [`Element`] - A named element with ordered attributes and children
//! - [`XmlNode`] - A child slot: element, text, or comment
//!
//! # Ownership
//!
//! Every node is owned by exactly one parent. Moving a record from one
//! document to another removes it from the first child list and pushes it
//! onto the second; the tree offers no way to alias a node into two places.

use std::path::{Path, PathBuf};

use crate::xml::error::XmlError;
use crate::xml::{parse, write};

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
    Comment(String),
}

/// A named element with ordered attributes and children.
///
/// Attribute order is preserved from the source document so that a
/// parse/serialize round trip does not reshuffle them.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// All child nodes in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements in document order, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(elem) => Some(elem),
            _ => None,
        })
    }

    /// Mutable variant of [`Element::child_elements`].
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            XmlNode::Element(elem) => Some(elem),
            _ => None,
        })
    }

    /// First child element with the given tag name.
    pub fn find_child(&self, tag: &str) -> Option<&Element> {
        self.child_elements().find(|elem| elem.name == tag)
    }

    /// Mutable variant of [`Element::find_child`].
    pub fn find_child_mut(&mut self, tag: &str) -> Option<&mut Element> {
        self.child_elements_mut().find(|elem| elem.name == tag)
    }

    /// First element with the given tag name in depth-first order,
    /// starting from (and including) this element.
    pub fn first_descendant(&self, tag: &str) -> Option<&Element> {
        if self.name == tag {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.first_descendant(tag))
    }

    /// Mutable variant of [`Element::first_descendant`].
    pub fn first_descendant_mut(&mut self, tag: &str) -> Option<&mut Element> {
        if self.name == tag {
            return Some(self);
        }
        self.child_elements_mut()
            .find_map(|child| child.first_descendant_mut(tag))
    }

    /// Concatenated text of the element's direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replace the element's content with a single text node.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.children = vec![XmlNode::Text(value.into())];
    }

    /// Set the text of every direct child element with the given tag.
    ///
    /// Returns true if at least one child matched. A missing child is left
    /// missing; creation is the caller's decision.
    pub fn set_child_text(&mut self, tag: &str, value: &str) -> bool {
        let mut matched = false;
        for child in self.child_elements_mut() {
            if child.name == tag {
                child.set_text(value);
                matched = true;
            }
        }
        matched
    }

    /// Append a child element.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(XmlNode::Element(element));
    }

    /// Append any child node.
    pub(crate) fn push_node(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    /// Index into the child list of the first child element with the given
    /// tag name.
    pub fn position_of_child(&self, tag: &str) -> Option<usize> {
        self.children.iter().position(|node| match node {
            XmlNode::Element(elem) => elem.name == tag,
            _ => false,
        })
    }

    /// Insert a child element at the given index in the child list.
    pub fn insert_element(&mut self, index: usize, element: Element) {
        self.children.insert(index, XmlNode::Element(element));
    }

    /// Remove and return, in document order, every child element matching
    /// the predicate. Non-element children and non-matching elements keep
    /// their relative order.
    pub fn extract_child_elements<F>(&mut self, mut pred: F) -> Vec<Element>
    where
        F: FnMut(&Element) -> bool,
    {
        let mut kept = Vec::with_capacity(self.children.len());
        let mut taken = Vec::new();
        for node in std::mem::take(&mut self.children) {
            match node {
                XmlNode::Element(elem) if pred(&elem) => taken.push(elem),
                other => kept.push(other),
            }
        }
        self.children = kept;
        taken
    }
}

/// A parsed XML file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    has_decl: bool,
    root: Element,
}

impl Document {
    pub(crate) fn from_parts(has_decl: bool, root: Element) -> Self {
        Self { has_decl, root }
    }

    /// Read and parse a file.
    pub fn load(path: &Path) -> Result<Self, XmlError> {
        let text = std::fs::read_to_string(path).map_err(|source| XmlError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&text, path)
    }

    /// Parse document text. `origin` labels parse errors; pass the source
    /// path, or a placeholder for in-memory documents.
    pub fn parse_str(text: &str, origin: impl Into<PathBuf>) -> Result<Self, XmlError> {
        parse::parse_document(text).map_err(|message| XmlError::Parse {
            path: origin.into(),
            message,
        })
    }

    /// Whether the source document carried an XML declaration.
    pub fn has_decl(&self) -> bool {
        self.has_decl
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the root element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Render the document as indented XML text.
    pub fn serialize(&self) -> Result<String, XmlError> {
        write::serialize_document(self).map_err(XmlError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        let mut record = Element::new("record");
        record.set_attribute("product-id", "100-A");
        let mut allocation = Element::new("allocation");
        allocation.set_text("12");
        record.push_element(allocation);
        let mut ats = Element::new("ats");
        ats.set_text("12");
        record.push_element(ats);
        record
    }

    #[test]
    fn attribute_lookup_and_replace() {
        let mut record = sample();
        assert_eq!(record.attribute("product-id"), Some("100-A"));
        assert_eq!(record.attribute("missing"), None);

        record.set_attribute("product-id", "200-B");
        assert_eq!(record.attribute("product-id"), Some("200-B"));
        assert_eq!(record.attributes().len(), 1);
    }

    #[test]
    fn set_child_text_replaces_content() {
        let mut record = sample();
        assert!(record.set_child_text("allocation", "0"));
        let allocation = record.find_child("allocation").unwrap();
        assert_eq!(allocation.text(), "0");
        assert_eq!(allocation.children().len(), 1);
    }

    #[test]
    fn set_child_text_missing_child_is_noop() {
        let mut record = sample();
        assert!(!record.set_child_text("in-stock-date", "2024-12-25Z"));
        assert!(record.find_child("in-stock-date").is_none());
    }

    #[test]
    fn insert_element_before_named_child() {
        let mut record = sample();
        let idx = record.position_of_child("ats").unwrap();
        record.insert_element(idx, Element::new("in-stock-date"));

        let names: Vec<&str> = record.child_elements().map(Element::name).collect();
        assert_eq!(names, vec!["allocation", "in-stock-date", "ats"]);
    }

    #[test]
    fn extract_preserves_order_of_kept_and_taken() {
        let mut records = Element::new("records");
        for id in ["100-A", "200-A", "100-B"] {
            let mut record = Element::new("record");
            record.set_attribute("product-id", id);
            records.push_element(record);
        }

        let taken = records.extract_child_elements(|elem| {
            elem.attribute("product-id").is_some_and(|id| id.starts_with("100"))
        });

        let taken_ids: Vec<&str> = taken.iter().filter_map(|e| e.attribute("product-id")).collect();
        assert_eq!(taken_ids, vec!["100-A", "100-B"]);

        let kept_ids: Vec<&str> = records
            .child_elements()
            .filter_map(|e| e.attribute("product-id"))
            .collect();
        assert_eq!(kept_ids, vec!["200-A"]);
    }

    #[test]
    fn first_descendant_finds_nested_container() {
        let mut root = Element::new("inventory");
        let mut list = Element::new("inventory-list");
        list.push_element(Element::new("records"));
        root.push_element(list);

        assert!(root.first_descendant("records").is_some());
        assert!(root.first_descendant("absent").is_none());
    }
}
