//! Character formatting, colours and page layout options.
//!
//! Run with: RUST_LOG=debug cargo run --example styled_lines

use chrono::Local;
use rtf_writer::{Color, Document, DocumentInfo, Format, PageLayout, RtfOptions, TextLine};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = RtfOptions::new()
        .with_strict(true)
        .with_page_layout(PageLayout::A4Landscape);
    let mut doc = Document::with_options(options);
    doc.set_info(
        DocumentInfo::new()
            .with_title("Styled lines")
            .with_created(Local::now().naive_local()),
    );

    let red = Color::rgb(255, 0, 0);
    let green = Color::rgb(0, 255, 0);

    doc.add(TextLine::new("hello world. A Line of text.\n"))?;
    doc.add(
        TextLine::new("hello world. A Line of text.\n")
            .with_format(Format::new().bold().strikethrough().size(16)),
    )?;
    doc.add(TextLine::new("hello world. A Red line\n").with_color(red))?;
    doc.add_text("hello world. A mix of ", None, None)?;
    doc.add_text("Green ", Some(green), None)?;
    doc.add_text("and ", None, None)?;
    doc.add_text("Red", Some(red), Some(Format::new().underline().italicized()))?;
    doc.add_text(" on a single line.\n\n", None, None)?;

    // Red was used twice but is registered once
    println!("{} colours registered\n", doc.colors().len());
    println!("{}", doc.render());

    Ok(())
}
