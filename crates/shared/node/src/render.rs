use crate::error::{RenderError, RenderErrorExt};
use crate::node::{Attribute, Element, Node};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::{self, Write};
use std::io;

impl Node {
    /// Writes this node as HTML.
    ///
    /// Attributes render with a leading space so they can be concatenated into a
    /// start tag; a group renders its members in order.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Element(element) => element.render(out),
            Self::Attribute(attribute) => attribute.render(out),
            Self::Text(content) => out.write_str(&encode_text(content)),
            Self::Raw(markup) => out.write_str(markup),
            Self::Group(nodes) => nodes.iter().try_for_each(|node| node.render(out)),
        }
    }

    /// Renders into an I/O sink, e.g. a socket or a file.
    ///
    /// # Errors
    /// Returns [`RenderError::Io`] if writing or flushing `out` fails.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> Result<(), RenderError> {
        out.write_all(self.to_string().as_bytes()).context("Failed to write rendered markup")?;
        out.flush().context("Failed to flush rendered markup")
    }
}

impl Attribute {
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_char(' ')?;
        out.write_str(self.name())?;
        if let Some(value) = self.value() {
            out.write_str("=\"")?;
            out.write_str(&encode_double_quoted_attribute(value))?;
            out.write_char('"')?;
        }
        Ok(())
    }
}

impl Element {
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_char('<')?;
        out.write_str(self.name())?;
        for attribute in self.attributes() {
            attribute.render(out)?;
        }
        out.write_char('>')?;

        if self.is_void() {
            return Ok(());
        }

        for node in self.content() {
            node.render(out)?;
        }
        out.write_str("</")?;
        out.write_str(self.name())?;
        out.write_char('>')
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
