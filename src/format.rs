//! Character formatting.
//!
//! RTF character properties are stream state rather than nested scopes, so a
//! styled run must switch every property on before the text and explicitly
//! off after it, resetting the font size to the default.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Default font size in half-points (12pt).
pub const DEFAULT_FONT_SIZE: u32 = 24;

/// Character style for a run of text.
///
/// # Examples
///
/// ```rust
/// use rtf_writer::Format;
///
/// let format = Format::new().underline().italicized().size(16);
/// assert_eq!(format.prefix(), "\\ul \\i \\fs16 ");
/// assert_eq!(format.suffix(), "\\ulnone \\i0 \\fs24 ");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Format {
    pub bold: bool,
    pub underline: bool,
    pub italicized: bool,
    pub strikethrough: bool,
    /// Font size in half-points.
    pub size: u32,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            bold: false,
            underline: false,
            italicized: false,
            strikethrough: false,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Format {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn italicized(mut self) -> Self {
        self.italicized = true;
        self
    }

    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Control words for the active flags, paired `(on, off)`, in emission order.
    fn toggles(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [
            (self.underline, "\\ul ", "\\ulnone "),
            (self.bold, "\\b ", "\\b0 "),
            (self.italicized, "\\i ", "\\i0 "),
            (self.strikethrough, "\\strike ", "\\strike0 "),
        ]
        .into_iter()
        .filter(|(active, _, _)| *active)
        .map(|(_, on, off)| (on, off))
    }

    /// Codes switching this format on, ending with the font size.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut code: String = self.toggles().map(|(on, _)| on).collect();
        let _ = write!(code, "\\fs{} ", self.size);
        code
    }

    /// Codes switching this format off, ending with a reset to the default size.
    #[must_use]
    pub fn suffix(&self) -> String {
        let mut code: String = self.toggles().map(|(_, off)| off).collect();
        let _ = write!(code, "\\fs{DEFAULT_FONT_SIZE} ");
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format_only_sets_size() {
        let format = Format::new();
        assert_eq!(format.prefix(), "\\fs24 ");
        assert_eq!(format.suffix(), "\\fs24 ");
    }

    #[test]
    fn test_flag_order_is_fixed() {
        let format = Format::new().strikethrough().italicized().bold().underline();
        assert_eq!(format.prefix(), "\\ul \\b \\i \\strike \\fs24 ");
        assert_eq!(format.suffix(), "\\ulnone \\b0 \\i0 \\strike0 \\fs24 ");
    }

    #[test]
    fn test_suffix_resets_custom_size() {
        let format = Format::new().bold().strikethrough().size(16);
        assert_eq!(format.prefix(), "\\b \\strike \\fs16 ");
        assert_eq!(format.suffix(), "\\b0 \\strike0 \\fs24 ");
    }

    #[test]
    fn test_format_from_partial_json() {
        let format: Format = serde_json::from_str(r#"{"bold": true}"#).unwrap();
        assert_eq!(format, Format::new().bold());
        assert_eq!(format.size, DEFAULT_FONT_SIZE);
    }
}
