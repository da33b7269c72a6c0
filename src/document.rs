//! The RTF document.
//!
//! A [`Document`] owns its elements and its colour table. Elements are
//! consumed by [`Document::add`], which interns every colour they carry and
//! stores a resolved copy, so values the caller still holds (or clones of
//! them added to another document) are never rewritten.
//!
//! Rendering writes, in order:
//!
//! 1. the header `{\rtf1\ansi\deff0`
//! 2. each preamble fragment (page layout, custom raw code)
//! 3. the colour table, if any colour was registered
//! 4. the `\info` group, if any metadata was set
//! 5. each body element, one per line
//! 6. the closing `}`
//!
//! ## Examples
//!
//! ```rust
//! use rtf_writer::{Color, Document, TextLine};
//!
//! let mut doc = Document::new();
//! doc.add(TextLine::new("hello world").with_color(Color::rgb(255, 0, 0))).unwrap();
//!
//! assert_eq!(
//!     doc.render(),
//!     "{\\rtf1\\ansi\\deff0\n\
//!      {\n\\colortbl;\n\\red255\\green0\\blue0;\n}\n\
//!      \\cf1 hello world\\cf0 \\ \n}"
//! );
//! ```

use std::fs::File;
use std::io;
use std::path::Path;

use crate::color::{Color, ColorRef, ColorRegistry};
use crate::element::{Element, RawMarkup, TextLine};
use crate::encoder::{Encode, Encoder};
use crate::format::Format;
use crate::info::DocumentInfo;
use crate::{Error, PageLayout, Result, RtfOptions};

const HEADER: &str = "{\\rtf1\\ansi\\deff0\n";
const STRICT: &str = "\\f0\\fs24\\cf0\n";

#[derive(Clone, Debug, Default)]
pub struct Document {
    options: RtfOptions,
    info: DocumentInfo,
    preamble: Vec<Element>,
    body: Vec<Element>,
    colors: ColorRegistry,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(RtfOptions::default())
    }

    /// Creates a document, applying the layout preset and strict header
    /// requested by `options`.
    #[must_use]
    pub fn with_options(options: RtfOptions) -> Self {
        let mut doc = Document {
            options,
            ..Default::default()
        };
        if let Some(layout) = doc.options.page_layout {
            doc.set_page_layout(layout);
        }
        if doc.options.strict {
            doc.add_strict();
        }
        doc
    }

    #[must_use]
    pub fn options(&self) -> &RtfOptions {
        &self.options
    }

    #[must_use]
    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    pub fn set_info(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    /// Appends an element to the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleElement`] for a bare [`Row`](crate::Row);
    /// wrap rows in a [`Table`](crate::Table).
    pub fn add(&mut self, element: impl Into<Element>) -> Result<()> {
        let element = self.resolve(element.into())?;
        log::debug!(
            "Document: add {} as body element {}",
            element.kind(),
            self.body.len() + 1
        );
        self.body.push(element);
        Ok(())
    }

    /// Shorthand for adding a [`TextLine`].
    pub fn add_text(
        &mut self,
        text: impl Into<String>,
        color: Option<Color>,
        format: Option<Format>,
    ) -> Result<()> {
        let mut line = TextLine::new(text);
        if let Some(color) = color {
            line = line.with_color(color);
        }
        if let Some(format) = format {
            line = line.with_format(format);
        }
        self.add(line)
    }

    /// Appends the strict font/size/colour reset to the body.
    pub fn add_strict(&mut self) {
        self.body.push(RawMarkup::new(STRICT).into());
    }

    /// Appends an element to the preamble, ahead of the colour table.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn add_preamble(&mut self, element: impl Into<Element>) -> Result<()> {
        let element = self.resolve(element.into())?;
        self.preamble.push(element);
        Ok(())
    }

    pub fn set_page_layout(&mut self, layout: PageLayout) {
        log::debug!("Document: page layout {layout}");
        self.preamble.push(RawMarkup::from(layout).into());
    }

    /// Registers a colour and returns its id, e.g. for cell backgrounds.
    pub fn add_color(&mut self, red: u8, green: u8, blue: u8) -> ColorRef {
        self.colors.register_rgb(red, green, blue)
    }

    pub fn register_color(&mut self, color: Color) -> ColorRef {
        self.colors.register(color)
    }

    #[must_use]
    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    #[must_use]
    pub fn preamble(&self) -> &[Element] {
        &self.preamble
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.body
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    fn resolve(&mut self, mut element: Element) -> Result<Element> {
        if !element.is_compatible() {
            return Err(Error::incompatible(element.kind()));
        }
        if let Element::Table(table) = &element {
            for (index, row) in table.rows().iter().enumerate() {
                let unbounded = row.unbounded_cells();
                if unbounded > 0 {
                    log::warn!(
                        "Document: table row {index} has {unbounded} cell(s) without column ends"
                    );
                }
            }
        }
        let colors = &mut self.colors;
        element.resolve_colors(&mut |color: Color| colors.register(color));
        Ok(element)
    }

    /// Renders the complete document.
    ///
    /// Rendering does not change the document; repeated calls return the
    /// same text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut encoder = Encoder::new(self.options.clone());
        self.encode(&mut encoder);
        encoder.into_inner()
    }

    /// Renders the document into a new file at `path`.
    ///
    /// The file is closed before returning, whether or not the write
    /// succeeded. A failed write may leave a partial file behind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.save_to(file)?;
        log::info!("Document: saved {} elements to {}", self.len(), path.display());
        Ok(())
    }

    /// Renders the document into an already open writer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing or flushing fails.
    pub fn save_to<W: io::Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Encode for Document {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.push(HEADER);
        for element in &self.preamble {
            element.encode(encoder);
            encoder.push("\n");
        }
        self.colors.encode(encoder);
        self.info.encode(encoder);
        for element in &self.body {
            element.encode(encoder);
            encoder.push("\n");
        }
        encoder.push("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Row, Table};

    #[test]
    fn test_hello_world() {
        let mut doc = Document::new();
        doc.add(TextLine::new("hello world")).unwrap();
        assert_eq!(doc.render(), "{\\rtf1\\ansi\\deff0\nhello world\n}");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Document::new().render(), "{\\rtf1\\ansi\\deff0\n}");
    }

    #[test]
    fn test_bare_row_is_rejected() {
        let mut doc = Document::new();
        let err = doc
            .add(Row::new(vec![TextLine::new("cell").with_color(Color::BLACK)]))
            .unwrap_err();
        assert!(matches!(err, Error::IncompatibleElement { kind: "row" }));
        assert!(doc.is_empty());
        assert!(doc.colors().is_empty());
    }

    #[test]
    fn test_add_does_not_touch_callers_copy() {
        let line = TextLine::new("shared").with_color(Color::rgb(0, 0, 255));
        let mut first = Document::new();
        let mut second = Document::new();
        second.add_color(1, 1, 1);

        first.add(line.clone()).unwrap();
        second.add(line.clone()).unwrap();

        assert_eq!(line.color_ref(), None);
        assert!(first.render().contains("\\cf1 shared"));
        assert!(second.render().contains("\\cf2 shared"));
    }

    #[test]
    fn test_table_cells_and_backgrounds_are_interned() {
        let mut doc = Document::new();
        let background = doc.add_color(254, 254, 233);
        let row = Row::new(vec![
            TextLine::new("red").with_color(Color::rgb(255, 0, 0)),
            TextLine::new("plain"),
        ])
        .with_cell_background(Color::rgb(254, 254, 233));
        doc.add(Table::new(vec![row])).unwrap();

        assert_eq!(background.id(), 1);
        assert_eq!(doc.colors().len(), 2);
        let rtf = doc.render();
        assert!(rtf.contains("\\clcbpat1\\cellx1000\\clcbpat1\\cellx2000\n"));
        assert!(rtf.contains("\\pard\\intbl{\\cf2 red\\cf0 \\ }\\cell\n"));
    }

    #[test]
    fn test_added_color_as_row_background() {
        let mut doc = Document::new();
        doc.add_color(255, 0, 0);
        let background = doc.add_color(254, 254, 233);
        let row = Row::new(vec![TextLine::new("apple")]).with_cell_background_ref(background);
        doc.add(Table::new(vec![row])).unwrap();

        assert_eq!(doc.colors().len(), 2);
        assert!(doc.render().contains("\\clcbpat2\\cellx1000\n"));
    }

    #[test]
    fn test_add_text_shorthand() {
        let mut doc = Document::new();
        doc.add_text("bold", None, Some(Format::new().bold())).unwrap();
        doc.add_text("green", Some(Color::rgb(0, 255, 0)), None)
            .unwrap();
        let rtf = doc.render();
        assert!(rtf.contains("\\b \\fs24 bold\\b0 \\fs24 \n"));
        assert!(rtf.contains("\\cf1 green\\cf0 \\ \n"));
    }

    #[test]
    fn test_strict_and_layout_from_options() {
        let options = RtfOptions::new()
            .with_strict(true)
            .with_page_layout(PageLayout::LetterPortrait);
        let mut doc = Document::with_options(options);
        doc.add(TextLine::new("x")).unwrap();
        assert_eq!(
            doc.render(),
            format!(
                "{HEADER}{}\n\\f0\\fs24\\cf0\n\nx\n}}",
                PageLayout::LetterPortrait.code()
            )
        );
    }

    #[test]
    fn test_save_to_writer() {
        let mut doc = Document::new();
        doc.add(TextLine::new("buffered")).unwrap();
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        assert_eq!(buffer, doc.render().into_bytes());
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let err = Document::new().save_to(FailingWriter).unwrap_err();
        match err {
            Error::Io(inner) => assert_eq!(inner.to_string(), "disk full"),
            other => panic!("Expected Io, got {other:?}"),
        }
    }
}
