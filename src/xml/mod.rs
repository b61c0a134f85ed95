//! Small XML document tree used for RimWorld's configuration files.
//!
//! RimWorld stores both `ModsConfig.xml` and saved mod lists (`.rml`) as plain
//! element-only XML: no attributes that matter, lists written as repeated `<li>`
//! children. This module turns such a document into an [`XmlElement`] tree and
//! back, leaving the schema mapping to [`crate::models`].
//!
//! Attributes, comments, processing instructions and the doctype are dropped
//! on read. Text is trimmed.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

/// Name of the element RimWorld uses for list entries.
pub const LIST_ITEM: &str = "li";

/// Errors raised while reading or writing an XML document
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("I/O error while writing XML: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected closing tag </{0}>")]
    UnexpectedClose(String),

    #[error("Element <{0}> is never closed")]
    Unclosed(String),

    #[error("Document has no root element")]
    NoRoot,

    #[error("Document has a second root element <{0}>")]
    MultipleRoots(String),

    #[error("Serialized XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One element of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Build a `<name><li>..</li>...</name>` list element.
    pub fn list<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut element = Self::new(name);
        element.children = items
            .into_iter()
            .map(|item| Self::with_text(LIST_ITEM, item))
            .collect();
        element
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Text of every `<li>` child, in document order.
    pub fn list_items(&self) -> Vec<String> {
        self.children
            .iter()
            .filter(|child| child.name == LIST_ITEM)
            .map(|child| child.text.clone())
            .collect()
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }
}

/// Parse a document into its root element.
///
/// # Errors
///
/// Returns an error on malformed XML, unbalanced tags, an empty document or a
/// document with more than one root element.
pub fn parse_document(input: &str) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(XmlElement::new(element_name(&start))),
            Event::Empty(start) => {
                attach(&mut stack, &mut root, XmlElement::new(element_name(&start)))?;
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    XmlError::UnexpectedClose(String::from_utf8_lossy(end.name().as_ref()).into_owned())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::Unclosed(open.name));
    }

    root.ok_or(XmlError::NoRoot)
}

/// Serialize a document with an XML declaration and two-space indentation.
pub fn write_document(root: &XmlElement) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(&mut writer, root)?;

    let mut output = String::from_utf8(writer.into_inner())?;
    output.push('\n');
    Ok(output)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), XmlError> {
    let name = element.name.as_str();

    if element.children.is_empty() && element.text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(name)))?;
    if !element.text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&element.text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;

    Ok(())
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.push(element);
        return Ok(());
    }

    if root.is_some() {
        return Err(XmlError::MultipleRoots(element.name));
    }
    *root = Some(element);
    Ok(())
}
