//! Owned XML element tree and the entity (de)serialization contract.
//!
//! `Element` is the unit every entity reads from and writes to. The schema
//! convention is uniform across the model layer:
//! - the element is named after the concrete type (`<Article>`, `<Person>`)
//! - child elements are named after properties (`<Name>`, `<DateCreated>`)
//! - nested entities appear as child elements named after *their* type
//! - dates use RFC-1123 text, binary payloads use Base64
//!
//! Parsing is built on `quick-xml` events; writing escapes through
//! `quick_xml::escape` into plain strings. Missing required elements and
//! malformed scalar text surface as errors at the point of use, never as
//! silent defaults.

mod value;

pub use value::{
    element_to_value, from_xml_str, to_xml_string, value_to_element, write_xml, write_xml_bytes,
};

use std::fmt;

use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// A node in an element's content: either a nested element or a text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An owned XML element: name, attributes in document order, child nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by name, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in document order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Set an attribute, builder style
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Append a child element
    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append a text run
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Append `<name>text</name>`
    pub fn push_text_child(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let mut child = Element::new(name);
        let text = text.into();
        if !text.is_empty() {
            child.push_text(text);
        }
        self.push(child);
    }

    /// Append `<name>text</name>` only when the value is present
    pub fn push_opt_text_child(&mut self, name: impl Into<String>, text: Option<&str>) {
        if let Some(text) = text {
            self.push_text_child(name, text);
        }
    }

    /// All child nodes
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text runs
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Child elements with the given name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children().filter(move |e| e.name == name)
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children().find(|e| e.name == name)
    }

    /// Concatenated text content of this element (direct text runs only)
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            if let Node::Text(t) = node {
                out.push_str(t);
            }
        }
        out
    }

    /// Text content of the first child element with the given name
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(Element::text)
    }

    /// Text content of a required child element
    pub fn required_text(&self, name: &str) -> Result<String> {
        self.child(name)
            .map(Element::text)
            .ok_or_else(|| Error::MissingElement { name: name.into() })
    }

    /// Guard that this element carries the expected type name
    pub fn expect_name(&self, expected: &str) -> Result<()> {
        if self.name == expected {
            Ok(())
        } else {
            Err(Error::UnexpectedElement {
                expected: expected.into(),
                found: self.name.clone(),
            })
        }
    }

    /// Parse a document into its root element
    pub fn parse(input: &str) -> Result<Element> {
        tracing::trace!("parsing xml document ({} bytes)", input.len());
        let mut reader = Reader::from_str(input);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.push(element),
                        None => root = Some(element),
                    }
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::Malformed("unbalanced closing tag".into()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.push(element),
                        None => root = Some(element),
                    }
                }
                Event::Text(text) => {
                    let text = text.unescape()?.into_owned();
                    // whitespace-only runs are inter-element formatting, not content
                    if let (Some(parent), false) = (stack.last_mut(), text.trim().is_empty()) {
                        parent.push_text(text);
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(String::from_utf8_lossy(&data).into_owned());
                    }
                }
                Event::Eof => break,
                // declarations, comments, PIs and doctypes carry no model data
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(Error::Malformed("unclosed element".into()));
        }
        root.ok_or_else(|| Error::Malformed("document has no root element".into()))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Element> {
        let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr?;
            element.attributes.push((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                attr.unescape_value()?.into_owned(),
            ));
        }
        Ok(element)
    }

    fn write_to(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(out, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(out, " {}=\"{}\"", key, escape(value))?;
        }
        if self.children.is_empty() {
            return write!(out, "/>");
        }
        write!(out, ">")?;
        for node in &self.children {
            match node {
                Node::Element(child) => child.write_to(out)?,
                Node::Text(text) => write!(out, "{}", escape(text))?,
            }
        }
        write!(out, "</{}>", self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Serialize an entity into its element form
pub trait XmlEncode {
    fn to_xml(&self) -> Element;
}

/// Materialize an entity from its element form
pub trait XmlDecode: Sized {
    fn from_xml(el: &Element) -> Result<Self>;
}

/// Render a timestamp in the schema's RFC-1123 text form
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc2822()
}

/// Parse a timestamp from the schema's RFC-1123 text form
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc2822(text)?.with_timezone(&Utc))
}
