//! Tables with fixed column ends, borders, padding and striped backgrounds.
//!
//! Run with: cargo run --example tables

use rtf_writer::{BorderStyle, Borders, Color, Document, Padding, Row, Table, TextLine};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = [
        ("apple", 121, "selling"),
        ("linux", 136, "borrowing"),
        ("banana", 142, "buying"),
        ("cherry", 137, "borrowing"),
        ("win2k", 147, "in debt"),
    ];
    let row_borders = [
        ("plain", "lbrt"),
        ("dot", "lr"),
        ("dash", "lrtb"),
        ("plain", "lr"),
        ("double", "t"),
    ];
    let stripe = Color::rgb(254, 254, 233);

    let mut doc = Document::new();
    doc.add(TextLine::new("Here is a table with varying widths:"))?;

    let mut table = Table::default();
    for (index, ((company, value, state), (style, sides))) in
        data.into_iter().zip(row_borders).enumerate()
    {
        let style: BorderStyle = style.parse()?;
        let mut row = Row::new(vec![
            TextLine::new(company),
            TextLine::new(value.to_string()),
            TextLine::new(state),
        ])
        .with_column_ends(vec![1500, 2100, 4500])
        .with_borders(Borders::parse(sides, style)?)
        .with_padding(Padding::parse("lr", 72)?);
        if index % 2 == 0 {
            row = row.with_cell_background(stripe);
        }
        table.push_row(row);
    }
    doc.add(table)?;

    println!("{}", doc.render());
    Ok(())
}
