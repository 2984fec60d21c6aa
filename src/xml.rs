//! Minimal document tree for descriptor files.
//!
//! Descriptors are tiny, so the whole document is read into an owned tree of
//! elements and text nodes. Element names are stored without their
//! namespace prefix, the same way DOM `localName` reports them.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Value of the attribute with this qualified name, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

/// Reads a whole XML document and returns its root element.
pub fn parse_document<R: BufRead>(input: R) -> Result<Element> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event_into(&mut buf)?;
        match event {
            Event::Start(ref start) => {
                ensure_single_root(&root)?;
                stack.push(element_from_start(start)?);
            }
            Event::Empty(ref start) => {
                ensure_single_root(&root)?;
                let el = element_from_start(start)?;
                attach(&mut stack, &mut root, el);
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched end tags
                let el = stack
                    .pop()
                    .ok_or_else(|| Error::Document("unexpected end tag".into()))?;
                attach(&mut stack, &mut root, el);
            }
            Event::Text(ref text) => {
                if let Some(top) = stack.last_mut() {
                    top.children.push(Node::Text(text.unescape()?.into_owned()));
                }
            }
            Event::CData(ref data) => {
                if let Some(top) = stack.last_mut() {
                    top.children.push(Node::Text(String::from_utf8_lossy(data).into_owned()));
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(Error::Document(format!("element <{}> is never closed", open.name)));
    }
    root.ok_or_else(|| Error::Document("no root element".into()))
}

pub fn parse_str(input: &str) -> Result<Element> {
    parse_document(input.as_bytes())
}

fn ensure_single_root(root: &Option<Element>) -> Result<()> {
    match root {
        Some(r) => Err(Error::Document(format!("content after root element <{}>", r.name))),
        None => Ok(()),
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(el)),
        None => *root = Some(el),
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let mut el = Element::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        el.attributes.push((key, value));
    }
    Ok(el)
}
