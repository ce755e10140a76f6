//! xml::write
//!
//! Indented serialization of a document tree.
//!
//! Output is two-space indented with element text kept inline, which is the
//! layout downstream consumers of the feed already parse. The XML
//! declaration is re-emitted only when the source document had one.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::xml::tree::{Document, Element, XmlNode};

/// Render a [`Document`] as indented XML text with a trailing newline.
pub(crate) fn serialize_document(doc: &Document) -> Result<String, String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    if doc.has_decl() {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|err| err.to_string())?;
    }
    write_element(&mut writer, doc.root())?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

fn write_element(writer: &mut Writer<Vec<u8>>, elem: &Element) -> Result<(), String> {
    let mut start = BytesStart::new(elem.name());
    for (key, value) in elem.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    writer
        .write_event(Event::Start(start))
        .map_err(|err| err.to_string())?;

    for child in elem.children() {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|err| err.to_string())?,
            // Comment bodies are written verbatim; entity escaping does not
            // apply inside comments.
            XmlNode::Comment(text) => writer
                .write_event(Event::Comment(BytesText::from_escaped(text.as_str())))
                .map_err(|err| err.to_string())?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(elem.name())))
        .map_err(|err| err.to_string())
}
