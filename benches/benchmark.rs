//! Performance benchmarks for rs-mobilizer.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small synthetic article page for the full pipeline
//! - The weighting scan alone, on a page with many candidates
//! - Table flattening on a large serialized table

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_mobilizer::{dom, html_processing, mobilize, selector, tables, MobilizeMode, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <meta property="og:image" content="https://example.com/lead.jpg">
    <script>var tracking = true;</script>
    <style>body { font-family: serif; }</style>
</head>
<body>
    <div id="nav" class="navigation">
        <a href="/">Home</a>
        <a href="/about">About</a>
    </div>
    <div class="content">
        <h1 class="title">Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that should be picked as the article body.</p>
        <p>Here is a second paragraph with more content. Selection should prefer
        this block over the navigation and the sidebar.</p>
        <table><tr><th>Year</th><th>Value</th></tr><tr><td>2024</td><td>42</td></tr></table>
    </div>
    <div class="sidebar">
        <h3>Related Articles</h3>
        <ul>
            <li>Related article 1</li>
            <li>Related article 2</li>
        </ul>
    </div>
    <div id="comments"><ul><li>Nice article</li></ul></div>
</body>
</html>
"#;

fn bench_mobilize_default(c: &mut Criterion) {
    c.bench_function("mobilize_default", |b| {
        b.iter(|| mobilize(black_box(SAMPLE_HTML.as_bytes()), &Options::default()));
    });
}

fn bench_mobilize_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    for (name, mode) in [
        ("none", MobilizeMode::None),
        ("mobilize", MobilizeMode::Mobilize),
        ("overlay", MobilizeMode::MobilizeWithTagOverlay),
    ] {
        let options = Options {
            url: "https://example.com/news/1".to_string(),
            mode,
            load_comments: true,
            remove_classes: vec!["sidebar".to_string()],
            ..Options::default()
        };
        group.bench_with_input(BenchmarkId::new("mobilize", name), &options, |b, options| {
            b.iter(|| mobilize(black_box(SAMPLE_HTML.as_bytes()), black_box(options)));
        });
    }
    group.finish();
}

/// Scoring scan over a page with a few hundred candidates.
fn bench_weight_scan(c: &mut Criterion) {
    let block = r#"<div class="item"><p>Short teaser text for an item in a long list.</p><h2>Item heading</h2></div>"#;
    let html = format!("<html><body>{}</body></html>", block.repeat(300));
    let doc = dom::parse(&html);

    c.bench_function("weight_scan", |b| {
        b.iter(|| selector::find_by_weight(html_processing::collect_candidates(&doc), black_box(None)));
    });
}

fn bench_flatten_tables(c: &mut Criterion) {
    let row = r#"<tr class="row"><td class="cell">value</td><td>other value</td></tr>"#;
    let html = format!("<table>{}</table>", row.repeat(2000));

    let mut group = c.benchmark_group("tables");
    group.throughput(Throughput::Bytes(html.len() as u64));
    group.bench_function("flatten", |b| {
        b.iter(|| tables::flatten_tables(black_box(&html)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_mobilize_default,
    bench_mobilize_modes,
    bench_weight_scan,
    bench_flatten_tables
);
criterion_main!(benches);
