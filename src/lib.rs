//! # rtf_writer
//!
//! Build a small document (styled text lines, tables, raw markup) in memory
//! and encode it to Rich Text Format.
//!
//! ## What gets written
//!
//! The output is plain RTF 1.x with a fixed, byte-exact layout: a header,
//! optional preamble code, a deduplicated colour table, the body elements one
//! per line, and the closing brace. Character styling (bold, italic,
//! underline, strikethrough, size) is written as explicit on/off control
//! words around each run, since RTF formatting is stream state and not
//! scoped.
//!
//! ## Key Features
//!
//! - **Colour interning**: equal RGB triples share one colour-table entry
//! - **Text lines**: embedded newlines become RTF hard line breaks
//! - **Tables**: fixed column ends, borders, padding and cell backgrounds
//! - **Page layouts**: A4/Letter presets in portrait or landscape
//!
//! ## Quick Start
//!
//! ```rust
//! use rtf_writer::{Color, Document, Format, Row, Table, TextLine};
//!
//! let mut doc = Document::new();
//! doc.add(TextLine::new("hello world").with_color(Color::rgb(255, 0, 0))).unwrap();
//! doc.add(TextLine::new("in bold\n").with_format(Format::new().bold())).unwrap();
//! doc.add(Table::new(vec![
//!     Row::new(vec![TextLine::new("hello"), TextLine::new("world")]),
//!     Row::new(vec![TextLine::new("hallo"), TextLine::new("Welt")]),
//! ]))
//! .unwrap();
//!
//! let rtf = rtf_writer::to_string(&doc);
//! assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0\n"));
//! assert!(rtf.contains("\\cellx1000\\cellx2000"));
//! ```
//!
//! ## Saving
//!
//! [`Document::save`] writes to a path, [`Document::save_to`] (or
//! [`to_writer`]) to any open [`std::io::Write`]. Both surface I/O failures
//! unchanged as [`Error::Io`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: colour registration and
//! element additions at `debug`, rows with missing column ends at `warn`,
//! saved files at `info`. Install any logger (e.g. `env_logger`) to see them.

pub mod color;
pub mod document;
pub mod element;
pub mod encoder;
pub mod error;
pub mod format;
pub mod info;
pub mod layout;
pub mod options;
pub mod table;

pub use color::{Color, ColorRef, ColorRegistry};
pub use document::Document;
pub use element::{Element, RawMarkup, TextLine};
pub use encoder::{Encode, Encoder};
pub use error::{Error, Result};
pub use format::{Format, DEFAULT_FONT_SIZE};
pub use info::DocumentInfo;
pub use layout::PageLayout;
pub use options::{RtfOptions, DEFAULT_COLUMN_WIDTH};
pub use table::{BorderStyle, Borders, Padding, Row, Side, Sides, Table};

use std::io;
use std::path::Path;

/// Render a document to an RTF string.
///
/// # Examples
///
/// ```rust
/// use rtf_writer::{to_string, Document, TextLine};
///
/// let mut doc = Document::new();
/// doc.add(TextLine::new("hello world")).unwrap();
/// assert_eq!(to_string(&doc), "{\\rtf1\\ansi\\deff0\nhello world\n}");
/// ```
#[must_use]
pub fn to_string(document: &Document) -> String {
    document.render()
}

/// Render a document into a writer.
///
/// # Examples
///
/// ```rust
/// use rtf_writer::{to_writer, Document, TextLine};
///
/// let mut doc = Document::new();
/// doc.add(TextLine::new("hi")).unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert!(buffer.ends_with(b"hi\n}"));
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    document.save_to(writer)
}

/// Render a document into a new file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file<P>(path: P, document: &Document) -> Result<()>
where
    P: AsRef<Path>,
{
    document.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_idempotent() {
        let mut doc = Document::new();
        doc.add(TextLine::new("one").with_color(Color::rgb(9, 9, 9)))
            .unwrap();
        doc.add(Table::new(vec![Row::new(vec![TextLine::new("cell")])]))
            .unwrap();
        assert_eq!(to_string(&doc), to_string(&doc));
    }

    #[test]
    fn test_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helloworld.rtf");
        let mut doc = Document::new();
        doc.add(TextLine::new("hello world")).unwrap();

        to_file(&path, &doc).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.render());
    }

    #[test]
    fn test_to_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.rtf");
        let err = to_file(&path, &Document::new()).unwrap_err();
        assert!(err.is_io());
    }
}
