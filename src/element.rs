//! Document elements.
//!
//! An [`Element`] is one encodable unit of a document. The set of kinds is
//! closed:
//!
//! - [`RawMarkup`]: pre-escaped RTF inserted verbatim (headers, layouts)
//! - [`TextLine`]: a run of text with optional colour and format
//! - [`Row`]: one table row (only valid inside a [`Table`])
//! - [`Table`]: a sequence of rows
//!
//! Each kind declares up front whether it carries a colour or a format; the
//! [`Document`](crate::Document) uses that to intern colours when the
//! element is added.

use std::fmt;

use crate::color::{Color, ColorRef};
use crate::encoder::{Encode, Encoder};
use crate::format::Format;
use crate::table::{Row, Table};

/// Opaque, already escaped RTF code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMarkup(String);

impl RawMarkup {
    pub fn new(code: impl Into<String>) -> Self {
        RawMarkup(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Encode for RawMarkup {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.push(&self.0);
    }
}

/// A run of text.
///
/// The colour given at construction is only a request: it is written once a
/// [`Document`](crate::Document) has registered it and resolved the line to
/// the document's colour-table id. A line encoded on its own therefore
/// carries no colour codes.
///
/// # Examples
///
/// ```rust
/// use rtf_writer::{Color, Encoder, TextLine};
///
/// let line = TextLine::new("two\nlines").with_color(Color::rgb(255, 0, 0));
/// assert_eq!(line.color(), Some(&Color::rgb(255, 0, 0)));
/// assert_eq!(Encoder::encode_to_string(&line), "two\\\n\\ lines");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    text: String,
    color: Option<Color>,
    format: Option<Format>,
    resolved: Option<ColorRef>,
}

impl TextLine {
    pub fn new(text: impl Into<String>) -> Self {
        TextLine {
            text: text.into(),
            color: None,
            format: None,
            resolved: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self.resolved = None;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    #[must_use]
    pub fn format(&self) -> Option<&Format> {
        self.format.as_ref()
    }

    /// The colour-table id assigned by the owning document, if any.
    #[must_use]
    pub fn color_ref(&self) -> Option<ColorRef> {
        self.resolved
    }

    pub(crate) fn resolve_color(&mut self, mut intern: impl FnMut(Color) -> ColorRef) {
        self.resolved = self.color.map(&mut intern);
    }
}

impl From<&str> for TextLine {
    fn from(text: &str) -> Self {
        TextLine::new(text)
    }
}

impl From<String> for TextLine {
    fn from(text: String) -> Self {
        TextLine::new(text)
    }
}

impl Encode for TextLine {
    fn encode(&self, encoder: &mut Encoder) {
        if let Some(color) = self.resolved {
            encoder.push_color_select(color);
        }
        if let Some(format) = &self.format {
            encoder.push(&format.prefix());
        }
        encoder.push_text(&self.text);
        if let Some(format) = &self.format {
            encoder.push(&format.suffix());
        }
        if self.resolved.is_some() {
            encoder.push_color_reset();
        }
    }
}

/// One encodable unit of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Raw(RawMarkup),
    Line(TextLine),
    Row(Row),
    Table(Table),
}

impl Element {
    /// Short lowercase name of the element kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Element::Raw(_) => "raw",
            Element::Line(_) => "line",
            Element::Row(_) => "row",
            Element::Table(_) => "table",
        }
    }

    /// Whether the element may stand on its own in a document body.
    ///
    /// A row is only meaningful inside a table.
    #[must_use]
    pub const fn is_compatible(&self) -> bool {
        !matches!(self, Element::Row(_))
    }

    /// The colour this element carries. Only text lines carry one; tables
    /// and rows hold colours on their cells.
    #[must_use]
    pub fn color(&self) -> Option<&Color> {
        match self {
            Element::Line(line) => line.color(),
            Element::Raw(_) | Element::Row(_) | Element::Table(_) => None,
        }
    }

    /// The format this element carries. Only text lines carry one.
    #[must_use]
    pub fn format(&self) -> Option<&Format> {
        match self {
            Element::Line(line) => line.format(),
            Element::Raw(_) | Element::Row(_) | Element::Table(_) => None,
        }
    }

    /// Resolves every colour in the element through `intern`.
    pub(crate) fn resolve_colors(&mut self, intern: &mut impl FnMut(Color) -> ColorRef) {
        match self {
            Element::Raw(_) => {}
            Element::Line(line) => line.resolve_color(&mut *intern),
            Element::Row(row) => row.resolve_colors(&mut *intern),
            Element::Table(table) => table.resolve_colors(&mut *intern),
        }
    }

    /// Renders the element on its own with default options.
    #[must_use]
    pub fn to_rtf(&self) -> String {
        Encoder::encode_to_string(self)
    }
}

impl Encode for Element {
    fn encode(&self, encoder: &mut Encoder) {
        match self {
            Element::Raw(raw) => raw.encode(encoder),
            Element::Line(line) => line.encode(encoder),
            Element::Row(row) => row.encode(encoder),
            Element::Table(table) => table.encode(encoder),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rtf())
    }
}

impl From<RawMarkup> for Element {
    fn from(raw: RawMarkup) -> Self {
        Element::Raw(raw)
    }
}

impl From<TextLine> for Element {
    fn from(line: TextLine) -> Self {
        Element::Line(line)
    }
}

impl From<Row> for Element {
    fn from(row: Row) -> Self {
        Element::Row(row)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}
