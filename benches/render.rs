use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rtf_writer::{
    to_string, BorderStyle, Borders, Color, Document, Format, Padding, Row, Table, TextLine,
};

fn palette(i: u32) -> Color {
    Color::rgb((i * 37 % 256) as u8, (i * 91 % 256) as u8, (i * 13 % 256) as u8)
}

fn benchmark_render_simple(c: &mut Criterion) {
    let mut doc = Document::new();
    doc.add(TextLine::new("hello world").with_color(Color::rgb(255, 0, 0)))
        .unwrap();

    c.bench_function("render_simple_line", |b| b.iter(|| to_string(black_box(&doc))));
}

fn benchmark_render_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_lines");

    for size in [10u32, 100, 1000].iter() {
        let mut doc = Document::new();
        for i in 0..*size {
            let line = TextLine::new(format!("Line {i}\nwith a break"))
                .with_color(palette(i % 16))
                .with_format(Format::new().bold().size(20));
            doc.add(line).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_render_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");

    for rows in [10u32, 100, 500].iter() {
        let table: Table = (0..*rows)
            .map(|i| {
                let row = Row::new(vec![
                    TextLine::new(format!("SKU{i}")),
                    TextLine::new(format!("Product {i}")),
                    TextLine::new(format!("{}", 9.99 + f64::from(i))),
                ])
                .with_column_ends(vec![1500, 4500, 6000])
                .with_borders(Borders::all())
                .with_padding(Padding::parse("lr", 72).unwrap());
                if i % 2 == 0 {
                    row.with_cell_background(Color::rgb(254, 254, 233))
                } else {
                    row
                }
            })
            .collect();
        let mut doc = Document::new();
        doc.add(table).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(rows), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_color_interning(c: &mut Criterion) {
    let lines: Vec<TextLine> = (0..500)
        .map(|i| TextLine::new("x").with_color(palette(i % 64)))
        .collect();

    c.bench_function("add_500_colored_lines", |b| {
        b.iter(|| {
            let mut doc = Document::new();
            for line in black_box(&lines) {
                doc.add(line.clone()).unwrap();
            }
            doc
        })
    });
}

fn benchmark_border_parsing(c: &mut Criterion) {
    c.bench_function("parse_borders", |b| {
        b.iter(|| Borders::parse(black_box("lrtb"), BorderStyle::Double))
    });
}

criterion_group!(
    benches,
    benchmark_render_simple,
    benchmark_render_lines,
    benchmark_render_table,
    benchmark_color_interning,
    benchmark_border_parsing
);
criterion_main!(benches);
