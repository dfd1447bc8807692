//! Benchmarks for license markup parsing.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use spdx_markup::{LicenseCollection, ParseConfig, Tokenizer, parse_body, render_tree};

const BSD_XML: &str = include_str!("../tests/fixtures/BSD-3-Clause.xml");
const MIT_XML: &str = include_str!("../tests/fixtures/MIT.xml");

/// A long synthetic body: many list items with nested optional/alt markup.
fn synthetic_body(items: usize) -> String {
    let mut body = String::from("<titleText><p>Synthetic License</p></titleText><list>");
    for i in 0..items {
        body.push_str(&format!(
            "<item><bullet>{i}.</bullet> Clause {i} applies \
             <optional spacing=\"before\">to <alt name=\"n{i}\" match=\".+\">you</alt></optional>\
             <br/> unless   waived.</item>"
        ));
    }
    body.push_str("</list>");
    body
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_bsd", |b| {
        b.iter(|| Tokenizer::new(BSD_XML).count());
    });
}

fn bench_collection(c: &mut Criterion) {
    let config = ParseConfig::new();
    c.bench_function("read_mit", |b| {
        b.iter(|| LicenseCollection::from_bytes(MIT_XML.as_bytes(), &config).unwrap());
    });
    c.bench_function("read_bsd", |b| {
        b.iter(|| LicenseCollection::from_bytes(BSD_XML.as_bytes(), &config).unwrap());
    });
}

fn bench_large_body(c: &mut Criterion) {
    let body = synthetic_body(2_000);
    let config = ParseConfig::new();
    c.bench_function("parse_body_2000_items", |b| {
        b.iter(|| parse_body(&body, &config).unwrap());
    });

    let doc = parse_body(&body, &config).unwrap();
    c.bench_function("render_tree_2000_items", |b| {
        b.iter(|| render_tree(&doc));
    });
}

criterion_group!(benches, bench_tokenize, bench_collection, bench_large_body);
criterion_main!(benches);
