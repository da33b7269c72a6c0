//! Colors and the per-document color table.
//!
//! RTF refers to colors by their index in a `\colortbl` group. Index `0` is
//! the implicit "auto" entry, so the first real color is `1`. The
//! [`ColorRegistry`] deduplicates RGB triples and hands out stable
//! [`ColorRef`]s in first-registration order.
//!
//! ## Examples
//!
//! ```rust
//! use rtf_writer::{Color, ColorRegistry};
//!
//! let mut colors = ColorRegistry::new();
//! let red = colors.register(Color::rgb(255, 0, 0));
//! let green = colors.register(Color::rgb(0, 255, 0));
//!
//! assert_eq!(red.id(), 1);
//! assert_eq!(green.id(), 2);
//! assert_eq!(colors.register(Color::rgb(255, 0, 0)), red);
//! ```

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use crate::encoder::{Encode, Encoder};

/// An RGB font or background color.
///
/// Two colors are equal when all three channels match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::rgb(red, green, blue)
    }
}

/// A registered color-table index.
///
/// Always `>= 1`; the "no color" index `0` cannot be represented and is
/// written directly as `\cf0` by the encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorRef(NonZeroU32);

impl ColorRef {
    pub(crate) fn from_index(index: usize) -> Self {
        let id = u32::try_from(index.saturating_add(1))
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MAX);
        ColorRef(id)
    }

    /// The 1-based color-table id.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0.get()
    }

    fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deduplicating, insertion-ordered color table.
///
/// Entries are never removed, so every [`ColorRef`] handed out stays valid
/// for the registry's lifetime.
#[derive(Clone, Debug, Default)]
pub struct ColorRegistry {
    entries: IndexSet<Color>,
}

impl ColorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reference for `color`, registering it if it is new.
    pub fn register(&mut self, color: Color) -> ColorRef {
        let (index, inserted) = self.entries.insert_full(color);
        let color_ref = ColorRef::from_index(index);
        if inserted {
            log::debug!(
                "ColorRegistry: registered \\red{}\\green{}\\blue{} as {color_ref}",
                color.red,
                color.green,
                color.blue
            );
        }
        color_ref
    }

    /// Shorthand for [`register`](Self::register) with raw channels.
    pub fn register_rgb(&mut self, red: u8, green: u8, blue: u8) -> ColorRef {
        self.register(Color::rgb(red, green, blue))
    }

    /// Looks up the reference of an already registered color.
    #[must_use]
    pub fn lookup(&self, color: &Color) -> Option<ColorRef> {
        self.entries.get_index_of(color).map(ColorRef::from_index)
    }

    #[must_use]
    pub fn get(&self, color_ref: ColorRef) -> Option<&Color> {
        self.entries.get_index(color_ref.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRef, &Color)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, color)| (ColorRef::from_index(index), color))
    }
}

impl Encode for ColorRegistry {
    fn encode(&self, encoder: &mut Encoder) {
        if self.is_empty() {
            return;
        }
        encoder.push("{\n\\colortbl;\n");
        for color in &self.entries {
            write!(
                encoder,
                "\\red{}\\green{}\\blue{};\n",
                color.red, color.green, color.blue
            );
        }
        encoder.push("}\n");
    }
}
