//! Error types for RTF document construction and output.
//!
//! Building and rendering a document is total: colour registration, format
//! codes and markup generation cannot fail on well-typed input. Only two
//! things can go wrong:
//!
//! - **Incompatible elements**: an element kind the document body does not
//!   accept (a bare table row) was passed to [`Document::add`](crate::Document::add)
//! - **I/O errors**: the destination could not be opened or written
//!
//! ## Examples
//!
//! ```rust
//! use rtf_writer::{Document, Error, Row, TextLine};
//!
//! let mut doc = Document::new();
//! let err = doc.add(Row::new(vec![TextLine::new("orphan")])).unwrap_err();
//!
//! assert!(matches!(err, Error::IncompatibleElement { kind: "row" }));
//! assert_eq!(err.to_string(), "element 'row' incompatible with RTF");
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Represents all possible errors raised while building or saving a document.
#[derive(Debug, Error)]
pub enum Error {
    /// The element kind cannot be placed in a document body.
    #[error("element '{kind}' incompatible with RTF")]
    IncompatibleElement { kind: &'static str },

    /// IO error while writing the rendered document
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an incompatible-element error naming the offending kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtf_writer::Error;
    ///
    /// let err = Error::incompatible("row");
    /// assert!(err.to_string().contains("'row'"));
    /// ```
    pub fn incompatible(kind: &'static str) -> Self {
        Error::IncompatibleElement { kind }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtf_writer::Error;
    ///
    /// let err = Error::custom("unknown border style");
    /// assert!(err.to_string().contains("unknown border style"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if this error came from the output destination.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
