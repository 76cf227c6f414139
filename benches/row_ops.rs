//! Benchmarks for row store operations
//!
//! Run with: cargo bench row_ops

use comet::model::{Document, Row};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Render cache updates
// ============================================================================

#[divan::bench]
fn insert_char_plain_row() {
    let mut row = Row::new("the quick brown fox jumps over the lazy dog");
    row.insert_char(divan::black_box(20), 'x');
    divan::black_box(row.render());
}

#[divan::bench]
fn insert_char_tab_heavy_row() {
    let mut row = Row::new("\t\tfn main() {\t// indented\t}");
    row.insert_char(divan::black_box(5), 'x');
    divan::black_box(row.render());
}

#[divan::bench]
fn cx_to_rx_long_row() {
    let row = Row::new("\t".repeat(16) + &"word ".repeat(40));
    divan::black_box(row.cx_to_rx(divan::black_box(100)));
}

#[divan::bench]
fn rx_to_cx_long_row() {
    let row = Row::new("\t".repeat(16) + &"word ".repeat(40));
    divan::black_box(row.rx_to_cx(divan::black_box(200)));
}

// ============================================================================
// Document operations
// ============================================================================

#[divan::bench]
fn insert_row_middle_10k_rows() {
    let mut doc = Document::with_text(&"foo bar baz\n".repeat(10_000));
    doc.insert_row(divan::black_box(5_000), "inserted row".to_string());
    divan::black_box(doc.num_rows());
}

#[divan::bench]
fn split_row_middle() {
    let mut doc = Document::with_text(&"some line of content here\n".repeat(1_000));
    doc.split_row(divan::black_box(500), 10);
    divan::black_box(doc.num_rows());
}

#[divan::bench]
fn to_text_10k_rows() {
    let doc = Document::with_text(&"foo bar baz\n".repeat(10_000));
    divan::black_box(doc.to_text());
}
