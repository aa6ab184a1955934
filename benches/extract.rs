// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;

use studygo_scrape::{
    model::FlashcardPair,
    scrape::{dedup, extract, strategies, ListSelectors},
};

/// Synthetic rendered list page with `n` items and a language header.
fn list_page(n: usize) -> String {
    let mut body = String::from(
        r#"<div class="pair-list"><div class="pair-list-header"><div class="language-row">
        <div class="label"><span class="show-on-render">Engels</span></div>
        <div class="label"><span class="show-on-render">Nederlands</span></div></div></div>"#,
    );
    for i in 0..n {
        body.push_str(&format!(
            r#"<div class="pair-list-item">
              <div class="col s-5"><div class="info"><span class="show-on-render">term {i}</span></div></div>
              <div class="col s-7"><div class="info"><span class="show-on-render">definitie {i}</span></div></div>
            </div>"#
        ));
    }
    body.push_str("</div>");
    format!("<html><body>{body}</body></html>")
}

fn bench_extract(c: &mut Criterion) {
    let html = list_page(500);
    let sel = ListSelectors::studygo().expect("selectors");

    c.bench_function("extract_document_500", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&html));
            let res = extract::extract_document(&doc, &sel);
            black_box(res.map(|r| r.len()))
        })
    });

    let doc = Html::parse_document(&html);
    c.bench_function("extract_parsed_500", |b| {
        b.iter(|| black_box(extract::extract_document(black_box(&doc), &sel).map(|r| r.len())))
    });

    let chain = strategies::default_chain();
    c.bench_function("heuristic_chain_500", |b| {
        b.iter(|| black_box(strategies::run_chain(black_box(&doc), &chain).map(|(_, p)| p.len())))
    });
}

fn bench_dedup(c: &mut Criterion) {
    // Every pair appears three times.
    let pairs: Vec<FlashcardPair> = (0..3_000)
        .map(|i| FlashcardPair::new(format!("term {}", i % 1_000), format!("def {}", i % 1_000)))
        .collect();

    c.bench_function("dedup_3000", |b| {
        b.iter(|| black_box(dedup(black_box(pairs.clone())).len()))
    });
}

criterion_group!(benches, bench_extract, bench_dedup);
criterion_main!(benches);
