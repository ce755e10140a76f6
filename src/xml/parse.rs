//! xml::parse
//!
//! Event-based document construction on top of quick-xml.
//!
//! Empty elements are expanded so `<ats/>` and `<ats></ats>` build the same
//! tree, and whitespace-only text is dropped; the serializer re-indents.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::xml::tree::{Document, Element, XmlNode};

/// Build a [`Document`] from text. Errors are returned as plain messages;
/// the caller attaches the source path.
pub(crate) fn parse_document(text: &str) -> Result<Document, String> {
    let mut reader = Reader::from_str(text);
    let config = reader.config_mut();
    config.expand_empty_elements = true;
    config.trim_text_start = true;
    config.trim_text_end = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut has_decl = false;

    loop {
        match reader.read_event().map_err(|err| err.to_string())? {
            Event::Eof => break,
            Event::Decl(_) => has_decl = true,
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                // Unreachable with expand_empty_elements, kept for safety.
                let elem = element_from_start(&start)?;
                attach(&mut stack, &mut root, elem)?;
            }
            Event::End(_) => {
                let elem = stack.pop().ok_or_else(|| "closing tag without opener".to_string())?;
                attach(&mut stack, &mut root, elem)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|err| err.to_string())?;
                if let Some(parent) = stack.last_mut() {
                    parent.push_node(XmlNode::Text(text.into_owned()));
                }
            }
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.push_node(XmlNode::Text(text));
                }
            }
            Event::Comment(comment) => {
                let text = comment.unescape().map_err(|err| err.to_string())?;
                if let Some(parent) = stack.last_mut() {
                    parent.push_node(XmlNode::Comment(text.into_owned()));
                }
            }
            Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if !stack.is_empty() {
        return Err("unclosed element at end of document".to_string());
    }
    match root {
        Some(root) => Ok(Document::from_parts(has_decl, root)),
        None => Err("document has no root element".to_string()),
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut elem = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| err.to_string())?
            .into_owned();
        elem.set_attribute(key, value);
    }
    Ok(elem)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    elem: Element,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_node(XmlNode::Element(elem));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(elem);
            Ok(())
        }
        None => Err("more than one root element".to_string()),
    }
}
