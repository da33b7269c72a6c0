//! Your first RTF document: "hello world" in red.
//!
//! Run with: cargo run --example hello [output.rtf]

use rtf_writer::{Color, Document, TextLine};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut doc = Document::new();
    doc.add_strict();
    doc.add(TextLine::new("hello world").with_color(Color::rgb(255, 0, 0)))?;

    match std::env::args().nth(1) {
        Some(path) => {
            doc.save(&path)?;
            println!("Wrote {path}");
        }
        None => println!("{}", doc.render()),
    }

    Ok(())
}
