//! Configuration options for RTF documents.
//!
//! This module provides [`RtfOptions`], the document-wide settings applied
//! when a [`Document`](crate::Document) is created and rendered:
//!
//! - default column width for table rows without explicit column ends
//! - whether the strict font/size/colour reset is emitted before the body
//! - an optional page-layout preset for the preamble
//!
//! ## Examples
//!
//! ```rust
//! use rtf_writer::{Document, PageLayout, RtfOptions, TextLine};
//!
//! let options = RtfOptions::new()
//!     .with_column_width(1500)
//!     .with_page_layout(PageLayout::A4Landscape);
//!
//! let mut doc = Document::with_options(options);
//! doc.add(TextLine::new("wide page")).unwrap();
//! assert!(doc.render().contains("\\landscape"));
//! ```

use serde::{Deserialize, Serialize};

use crate::PageLayout;

/// Width in twips of each column when a row supplies no explicit ends.
pub const DEFAULT_COLUMN_WIDTH: u32 = 1000;

/// Configuration options for RTF output.
///
/// # Examples
///
/// ```rust
/// use rtf_writer::RtfOptions;
///
/// let options: RtfOptions = serde_json::from_str(r#"{"strict": true}"#).unwrap();
/// assert!(options.strict);
/// assert_eq!(options.column_width, 1000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtfOptions {
    /// Twips per column for rows without explicit ends.
    pub column_width: u32,
    /// Emit `\f0\fs24\cf0` as the first body element.
    pub strict: bool,
    pub page_layout: Option<PageLayout>,
}

impl Default for RtfOptions {
    fn default() -> Self {
        RtfOptions {
            column_width: DEFAULT_COLUMN_WIDTH,
            strict: false,
            page_layout: None,
        }
    }
}

impl RtfOptions {
    /// Creates default options (1000-twip columns, no strict header, no layout).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtf_writer::RtfOptions;
    ///
    /// let options = RtfOptions::new();
    /// assert_eq!(options.column_width, 1000);
    /// assert!(!options.strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column width used for rows without explicit ends.
    #[must_use]
    pub fn with_column_width(mut self, column_width: u32) -> Self {
        self.column_width = column_width;
        self
    }

    /// Emits the strict font/size/colour reset at the top of the body.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Places a page-layout preset in the preamble.
    #[must_use]
    pub fn with_page_layout(mut self, layout: PageLayout) -> Self {
        self.page_layout = Some(layout);
        self
    }
}
