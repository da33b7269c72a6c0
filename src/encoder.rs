//! RTF code generation.
//!
//! This module provides the [`Encoder`] output buffer and the [`Encode`]
//! trait every document part implements. Encoding is append-only: each part
//! pushes its markup fragment onto the shared buffer in document order.
//!
//! ## Usage
//!
//! Most users should render through [`Document::render`](crate::Document::render)
//! or the crate-level [`to_string`](crate::to_string). Individual parts can be
//! encoded on their own, which is handy for inspecting a single fragment:
//!
//! ```rust
//! use rtf_writer::{Encoder, Format, TextLine};
//!
//! let line = TextLine::new("hi").with_format(Format::new().bold());
//! assert_eq!(Encoder::encode_to_string(&line), "\\b \\fs24 hi\\b0 \\fs24 ");
//! ```

use std::fmt::{self, Write as _};

use crate::color::ColorRef;
use crate::RtfOptions;

/// Hard line break: backslash, newline, escaped space.
pub(crate) const LINE_BREAK: &str = "\\\n\\ ";

/// A part of a document that can write its own markup fragment.
pub trait Encode {
    fn encode(&self, encoder: &mut Encoder);
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, encoder: &mut Encoder) {
        (**self).encode(encoder)
    }
}

/// The RTF encoder.
///
/// Accumulates markup in an owned buffer. Created via [`Encoder::new`]
/// with the options that govern layout defaults.
pub struct Encoder {
    output: String,
    options: RtfOptions,
}

impl Encoder {
    pub fn new(options: RtfOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Encodes a single part with default options.
    #[must_use]
    pub fn encode_to_string<T: Encode + ?Sized>(value: &T) -> String {
        let mut encoder = Encoder::new(RtfOptions::default());
        value.encode(&mut encoder);
        encoder.into_inner()
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    #[must_use]
    pub fn options(&self) -> &RtfOptions {
        &self.options
    }

    #[inline]
    pub fn push(&mut self, code: &str) {
        self.output.push_str(code);
    }

    /// Formats directly into the output buffer; used through `write!`.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        // writing into a String cannot fail
        let _ = self.output.write_fmt(args);
    }

    /// Writes `text` with the group and control characters `\`, `{` and `}`
    /// escaped, for plain text inside destination groups.
    pub fn push_escaped(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\\' => self.output.push_str("\\\\"),
                '{' => self.output.push_str("\\{"),
                '}' => self.output.push_str("\\}"),
                _ => self.output.push(ch),
            }
        }
    }

    /// Writes `text` verbatim except that every `\n` becomes a hard line break.
    pub fn push_text(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.output.push_str(first);
        }
        for line in lines {
            self.output.push_str(LINE_BREAK);
            self.output.push_str(line);
        }
    }

    pub fn push_color_select(&mut self, color: ColorRef) {
        write!(self, "\\cf{} ", color.id());
    }

    pub fn push_color_reset(&mut self) {
        self.output.push_str("\\cf0 \\ ");
    }

    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) {
        value.encode(self);
    }
}
