//! HTML Serialization
//!
//! Walks a node tree and writes HTML into a byte sink.
//!
//! Key features:
//! - Attribute hoisting with last-wins merging
//! - Proper HTML escaping for text and attribute values
//! - Void element handling (no end tag, no self-closing slash)
//! - Writes as it walks; only a small fixed-size buffer sits in between

use std::io::{BufWriter, Write};

use crate::config::RenderConfig;
use crate::node::{Attribute, Element, Node};
use crate::RenderError;

/// Render a node into `sink` with the default configuration.
///
/// The first sink error aborts the walk. Bytes already written are not
/// rolled back.
pub fn render<W: Write>(node: &Node, sink: W) -> Result<(), RenderError> {
    render_with(node, sink, &RenderConfig::default())
}

/// Render a node into `sink` with an explicit configuration
pub fn render_with<W: Write>(node: &Node, sink: W, config: &RenderConfig) -> Result<(), RenderError> {
    if config.buffer_capacity == 0 {
        let mut sink = sink;
        return HtmlSerializer::new(&mut sink).serialize(node);
    }
    let mut buffered = BufWriter::with_capacity(config.buffer_capacity, sink);
    HtmlSerializer::new(&mut buffered).serialize(node)?;
    buffered.flush()?;
    Ok(())
}

/// Render a node into a freshly allocated string
pub fn render_to_string(node: &Node) -> Result<String, RenderError> {
    let mut out = Vec::new();
    render_with(node, &mut out, &RenderConfig { buffer_capacity: 0 })?;
    // Every byte written comes from &str slices or ASCII entities
    Ok(String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// HTML serializer over a byte sink
struct HtmlSerializer<W: Write> {
    out: W,
}

impl<W: Write> HtmlSerializer<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    /// Serialize a node and its descendants
    fn serialize(&mut self, node: &Node) -> Result<(), RenderError> {
        match node {
            Node::Element(elem) => self.serialize_element(elem),
            Node::Text(text) => Ok(escape_text(text, &mut self.out)?),
            Node::Raw(raw) => Ok(self.out.write_all(raw.as_bytes())?),
            Node::Fragment(children) => {
                for child in children {
                    self.serialize(child)?;
                }
                Ok(())
            }
            Node::Attr(attr) => {
                tracing::trace!("Dropping attribute {} outside of an element", attr.name());
                Ok(())
            }
            Node::Nil => Ok(()),
        }
    }

    fn serialize_element(&mut self, elem: &Element) -> Result<(), RenderError> {
        let (attrs, children) = elem.hoist();

        // Refuse before the start tag is written
        if let Some(bad) = attrs.iter().find(|a| a.value().is_some_and(|v| v.contains('\0'))) {
            return Err(RenderError::NulInAttribute {
                name: bad.name().to_string(),
            });
        }

        // Start tag
        self.out.write_all(b"<")?;
        self.out.write_all(elem.tag().as_bytes())?;
        for attr in &attrs {
            self.serialize_attribute(attr)?;
        }
        self.out.write_all(b">")?;

        if elem.is_void() {
            return Ok(());
        }

        for child in children {
            self.serialize(child)?;
        }

        // End tag
        self.out.write_all(b"</")?;
        self.out.write_all(elem.tag().as_bytes())?;
        self.out.write_all(b">")?;
        Ok(())
    }

    fn serialize_attribute(&mut self, attr: &Attribute) -> Result<(), RenderError> {
        self.out.write_all(b" ")?;
        self.out.write_all(attr.name().as_bytes())?;
        if let Some(value) = attr.value() {
            self.out.write_all(b"=\"")?;
            escape_attribute(value, &mut self.out)?;
            self.out.write_all(b"\"")?;
        }
        Ok(())
    }
}

/// Escape text content for HTML: `& < > " '`
pub fn escape_text<W: Write>(text: &str, out: &mut W) -> std::io::Result<()> {
    let bytes = text.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let entity: &[u8] = match b {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'"' => b"&quot;",
            b'\'' => b"&#39;",
            _ => continue,
        };
        out.write_all(&bytes[start..i])?;
        out.write_all(entity)?;
        start = i + 1;
    }
    out.write_all(&bytes[start..])
}

/// Escape a double-quoted attribute value: `& " ' < >` and control characters
pub fn escape_attribute<W: Write>(value: &str, out: &mut W) -> std::io::Result<()> {
    let bytes = value.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let entity: &[u8] = match b {
            b'&' => b"&amp;",
            b'"' => b"&quot;",
            b'\'' => b"&#39;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'\n' => b"&#10;",
            0x01..=0x1f | 0x7f => {
                out.write_all(&bytes[start..i])?;
                write!(out, "&#{};", b)?;
                start = i + 1;
                continue;
            }
            _ => continue,
        };
        out.write_all(&bytes[start..i])?;
        out.write_all(entity)?;
        start = i + 1;
    }
    out.write_all(&bytes[start..])
}
