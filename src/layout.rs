//! Page-layout presets.
//!
//! Each preset is a fixed run of page width/height/margin control words,
//! inserted verbatim into the preamble. Dimensions are in twips with one-inch
//! (1440 twip) margins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, RawMarkup};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    A4Portrait,
    A4Landscape,
    LetterPortrait,
    LetterLandscape,
}

impl PageLayout {
    pub const ALL: [PageLayout; 4] = [
        PageLayout::A4Portrait,
        PageLayout::A4Landscape,
        PageLayout::LetterPortrait,
        PageLayout::LetterLandscape,
    ];

    /// The preset's literal control words.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            PageLayout::A4Portrait => {
                "\\paperw11906\\paperh16838\\margl1440\\margr1440\\margt1440\\margb1440"
            }
            PageLayout::A4Landscape => {
                "\\paperw16838\\paperh11906\\landscape\\margl1440\\margr1440\\margt1440\\margb1440"
            }
            PageLayout::LetterPortrait => {
                "\\paperw12240\\paperh15840\\margl1440\\margr1440\\margt1440\\margb1440"
            }
            PageLayout::LetterLandscape => {
                "\\paperw15840\\paperh12240\\landscape\\margl1440\\margr1440\\margt1440\\margb1440"
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PageLayout::A4Portrait => "A4_portrait",
            PageLayout::A4Landscape => "A4_landscape",
            PageLayout::LetterPortrait => "Letter_portrait",
            PageLayout::LetterLandscape => "Letter_landscape",
        }
    }
}

impl fmt::Display for PageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageLayout {
    type Err = Error;

    /// Accepts the preset names `A4_portrait`, `A4_landscape`,
    /// `Letter_portrait` and `Letter_landscape`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageLayout::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::custom(format!("unknown page layout '{s}'")))
    }
}

impl From<PageLayout> for RawMarkup {
    fn from(layout: PageLayout) -> Self {
        RawMarkup::new(layout.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_dimensions() {
        assert!(PageLayout::A4Landscape
            .code()
            .starts_with("\\paperw16838\\paperh11906\\landscape"));
        assert!(!PageLayout::A4Portrait.code().contains("\\landscape"));
    }

    #[test]
    fn test_parse_preset_names() {
        assert_eq!(
            "A4_landscape".parse::<PageLayout>().unwrap(),
            PageLayout::A4Landscape
        );
        assert_eq!(
            "letter_portrait".parse::<PageLayout>().unwrap(),
            PageLayout::LetterPortrait
        );
        assert!("A5_portrait".parse::<PageLayout>().is_err());
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for layout in PageLayout::ALL {
            assert_eq!(layout.to_string().parse::<PageLayout>().unwrap(), layout);
        }
    }
}
