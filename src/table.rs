//! RTF table support.
//!
//! RTF has no table object as such: a table is a run of rows, and each row
//! first declares its cell boundaries (`\cellx`, cumulative offsets in twips)
//! and cell properties, then lists the cell contents.
//!
//! ```text
//! \trowd<padding>
//! <borders><background>\cellx1000<borders><background>\cellx2000
//! \pard\intbl{first}\cell
//! \pard\intbl{second}\cell
//! \row
//! ```
//!
//! ## Column ends
//!
//! Rows without explicit ends get uniform columns of
//! [`RtfOptions::column_width`](crate::RtfOptions::column_width) twips. When
//! explicit ends are shorter than the cell list, only the first
//! `column_ends.len()` cells get boundary declarations; the remaining cells
//! are still written.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::{Color, ColorRef};
use crate::encoder::{Encode, Encoder};
use crate::element::TextLine;
use crate::Error;

/// One side of a cell or row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// Emission order for border and padding codes.
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Side::Left => 'l',
            Side::Top => 't',
            Side::Right => 'r',
            Side::Bottom => 'b',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Side::ALL.into_iter().find(|side| side.letter() == letter)
    }
}

/// A set of sides, always iterated left, top, right, bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sides {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
}

impl Sides {
    pub const NONE: Sides = Sides {
        left: false,
        top: false,
        right: false,
        bottom: false,
    };

    pub const ALL: Sides = Sides {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };

    #[must_use]
    pub fn with(mut self, side: Side) -> Self {
        match side {
            Side::Left => self.left = true,
            Side::Top => self.top = true,
            Side::Right => self.right = true,
            Side::Bottom => self.bottom = true,
        }
        self
    }

    #[must_use]
    pub fn contains(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Sides::NONE
    }

    pub fn iter(&self) -> impl Iterator<Item = Side> + '_ {
        Side::ALL.into_iter().filter(|side| self.contains(*side))
    }
}

impl FromStr for Sides {
    type Err = Error;

    /// Parses a side string such as `"lbr"`; letters may appear in any order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().try_fold(Sides::NONE, |sides, letter| {
            Side::from_letter(letter.to_ascii_lowercase())
                .map(|side| sides.with(side))
                .ok_or_else(|| Error::custom(format!("unknown side '{letter}' in '{s}'")))
        })
    }
}

impl FromIterator<Side> for Sides {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        iter.into_iter().fold(Sides::NONE, Sides::with)
    }
}

/// Cell border line style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Plain,
    Dot,
    Dash,
    Double,
}

impl BorderStyle {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            BorderStyle::Plain => "\\brdrs",
            BorderStyle::Dot => "\\brdrdot",
            BorderStyle::Dash => "\\brdrdash",
            BorderStyle::Double => "\\brdrdb",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BorderStyle::Plain => "plain",
            BorderStyle::Dot => "dot",
            BorderStyle::Dash => "dash",
            BorderStyle::Double => "double",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(BorderStyle::Plain),
            "dot" => Ok(BorderStyle::Dot),
            "dash" => Ok(BorderStyle::Dash),
            "double" => Ok(BorderStyle::Double),
            other => Err(Error::custom(format!("unknown border style '{other}'"))),
        }
    }
}

/// Borders drawn on every cell of a row.
///
/// # Examples
///
/// ```rust
/// use rtf_writer::{Borders, BorderStyle, Encoder};
///
/// let borders = Borders::parse("rl", BorderStyle::Dot).unwrap();
/// assert_eq!(
///     Encoder::encode_to_string(&borders),
///     "\\clbrdrl\\brdrdot\\clbrdrr\\brdrdot"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Borders {
    pub sides: Sides,
    pub style: BorderStyle,
}

impl Borders {
    #[must_use]
    pub fn new(sides: Sides, style: BorderStyle) -> Self {
        Borders { sides, style }
    }

    /// Plain borders on all four sides.
    #[must_use]
    pub fn all() -> Self {
        Borders::new(Sides::ALL, BorderStyle::Plain)
    }

    pub fn parse(sides: &str, style: BorderStyle) -> Result<Self, Error> {
        Ok(Borders::new(sides.parse()?, style))
    }
}

impl Encode for Borders {
    fn encode(&self, encoder: &mut Encoder) {
        for side in self.sides.iter() {
            write!(encoder, "\\clbrdr{}{}", side.letter(), self.style.code());
        }
    }
}

/// Row-wide cell padding in twips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Padding {
    pub sides: Sides,
    pub size: u32,
}

impl Padding {
    #[must_use]
    pub fn new(sides: Sides, size: u32) -> Self {
        Padding { sides, size }
    }

    pub fn parse(sides: &str, size: u32) -> Result<Self, Error> {
        Ok(Padding::new(sides.parse()?, size))
    }
}

impl Encode for Padding {
    fn encode(&self, encoder: &mut Encoder) {
        // \trpaddf<s>3 marks the value as twips; without it readers ignore it
        for side in self.sides.iter() {
            let letter = side.letter();
            write!(encoder, "\\trpadd{letter}{}\\trpaddf{letter}3", self.size);
        }
    }
}

/// A table row.
///
/// # Examples
///
/// ```rust
/// use rtf_writer::{Encoder, Row, TextLine};
///
/// let row = Row::new(vec![TextLine::new("a"), TextLine::new("b")]);
/// assert_eq!(
///     Encoder::encode_to_string(&row),
///     "\\trowd\n\\cellx1000\\cellx2000\n\\pard\\intbl{a}\\cell\n\\pard\\intbl{b}\\cell\n\\row\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    cells: Vec<TextLine>,
    column_ends: Option<Vec<u32>>,
    borders: Option<Borders>,
    padding: Option<Padding>,
    cell_background: Option<Color>,
    resolved_background: Option<ColorRef>,
}

impl Row {
    pub fn new(cells: Vec<TextLine>) -> Self {
        Row {
            cells,
            column_ends: None,
            borders: None,
            padding: None,
            cell_background: None,
            resolved_background: None,
        }
    }

    /// Sets cumulative column end offsets in twips.
    #[must_use]
    pub fn with_column_ends(mut self, ends: Vec<u32>) -> Self {
        self.column_ends = Some(ends);
        self
    }

    #[must_use]
    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets the background colour of every cell in the row.
    #[must_use]
    pub fn with_cell_background(mut self, color: impl Into<Color>) -> Self {
        self.cell_background = Some(color.into());
        self.resolved_background = None;
        self
    }

    /// Sets the background to a colour already registered with
    /// [`Document::add_color`](crate::Document::add_color).
    ///
    /// The reference must come from the document the row ends up in; it is
    /// written as-is.
    #[must_use]
    pub fn with_cell_background_ref(mut self, color: ColorRef) -> Self {
        self.cell_background = None;
        self.resolved_background = Some(color);
        self
    }

    pub fn push_cell(&mut self, cell: impl Into<TextLine>) {
        self.cells.push(cell.into());
    }

    #[must_use]
    pub fn cells(&self) -> &[TextLine] {
        &self.cells
    }

    #[must_use]
    pub fn column_ends(&self) -> Option<&[u32]> {
        self.column_ends.as_deref()
    }

    #[must_use]
    pub fn cell_background(&self) -> Option<&Color> {
        self.cell_background.as_ref()
    }

    /// Number of trailing cells that get no `\cellx` boundary.
    #[must_use]
    pub fn unbounded_cells(&self) -> usize {
        match &self.column_ends {
            Some(ends) => self.cells.len().saturating_sub(ends.len()),
            None => 0,
        }
    }

    /// Column ends as written: explicit ends, or uniform `column_width` columns.
    #[must_use]
    pub fn effective_column_ends(&self, column_width: u32) -> Vec<u32> {
        match &self.column_ends {
            Some(ends) => ends.iter().copied().take(self.cells.len()).collect(),
            None => (1..=self.cells.len() as u32)
                .map(|column| column.saturating_mul(column_width))
                .collect(),
        }
    }

    pub(crate) fn resolve_colors(&mut self, intern: &mut impl FnMut(Color) -> ColorRef) {
        for cell in &mut self.cells {
            cell.resolve_color(&mut *intern);
        }
        if let Some(color) = self.cell_background {
            self.resolved_background = Some(intern(color));
        }
    }
}

impl Encode for Row {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.push("\\trowd");
        if let Some(padding) = &self.padding {
            padding.encode(encoder);
        }
        encoder.push("\n");

        let column_width = encoder.options().column_width;
        for end in self.effective_column_ends(column_width) {
            if let Some(borders) = &self.borders {
                borders.encode(encoder);
            }
            if let Some(background) = self.resolved_background {
                write!(encoder, "\\clcbpat{background}");
            }
            write!(encoder, "\\cellx{end}");
        }
        encoder.push("\n");

        for cell in &self.cells {
            encoder.push("\\pard\\intbl{");
            cell.encode(encoder);
            encoder.push("}\\cell\n");
        }
        encoder.push("\\row\n");
    }
}

/// A table: rows written back to back after a line break.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    column_ends: Option<Vec<u32>>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Table {
            rows,
            column_ends: None,
        }
    }

    /// Applies the same column ends to every row, including rows pushed
    /// later through [`push_row`](Self::push_row).
    #[must_use]
    pub fn with_column_ends(mut self, ends: Vec<u32>) -> Self {
        for row in &mut self.rows {
            row.column_ends = Some(ends.clone());
        }
        self.column_ends = Some(ends);
        self
    }

    /// Appends a row; a table-wide column layout replaces the row's own.
    pub fn push_row(&mut self, mut row: Row) {
        if let Some(ends) = &self.column_ends {
            row.column_ends = Some(ends.clone());
        }
        self.rows.push(row);
    }

    #[must_use]
    pub fn column_ends(&self) -> Option<&[u32]> {
        self.column_ends.as_deref()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn resolve_colors(&mut self, intern: &mut impl FnMut(Color) -> ColorRef) {
        for row in &mut self.rows {
            row.resolve_colors(&mut *intern);
        }
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Table::new(iter.into_iter().collect())
    }
}

impl Encode for Table {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.push("\\\n");
        for row in &self.rows {
            row.encode(encoder);
        }
    }
}
