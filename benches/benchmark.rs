//! Performance benchmarks for bioscrape.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A profile page resolved from JSON-LD and a `#meta` block
//! - The degraded path, with the block commented out and only text fallbacks
//! - Saved profile pages from `../data/profiles`, when present

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use bioscrape::{extract, extract_with_options, Options};
use std::fs;

const PROFILE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Jane Roe - Profile</title>
    <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "Person", "name": "Jane Roe",
     "birthDate": "1990-04-12", "height": {"@type": "QuantitativeValue", "value": 172, "unitCode": "CMT"},
     "nationality": {"@type": "Country", "name": "Portugal"}}
    </script>
</head>
<body>
    <nav><a href="/">Home</a> <a href="/players">Players</a></nav>
    <div id="info">
        <h1>Jane Roe</h1>
        <div id="meta">
            <p><strong>Position:</strong> MF ▪ <strong>Footed:</strong> Left</p>
            <p><span>172cm</span>, <span>61kg</span></p>
            <p><strong>Born:</strong> <span>April 12, 1990</span> <span>in Lisbon, Portugal</span></p>
            <p>Senior debut: 2008-09-01</p>
            <p>Contract Expires June 2027 Via option.</p>
        </div>
    </div>
    <footer><p>Copyright 2024</p></footer>
</body>
</html>
"#;

const COMMENTED_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<body>
    <h1>Jane Roe</h1>
    <!--
    <div id="meta">
        <p><strong>Born:</strong> <span>April 12, 1990</span> <span>in Lisbon, Portugal</span></p>
        <p>Height: 172cm</p>
    </div>
    -->
    <section><p>Club: Benfica. Contract until 30 June 2026.</p></section>
</body>
</html>
"#;

fn bench_extract_profile(c: &mut Criterion) {
    c.bench_function("extract_profile", |b| {
        b.iter(|| extract(black_box(PROFILE_HTML)));
    });
}

fn bench_extract_commented(c: &mut Criterion) {
    c.bench_function("extract_commented", |b| {
        b.iter(|| extract(black_box(COMMENTED_HTML)));
    });
}

fn bench_extract_without_fallbacks(c: &mut Criterion) {
    let options = Options {
        use_comment_fallback: false,
        use_document_fallback: false,
        ..Options::default()
    };

    c.bench_function("extract_without_fallbacks", |b| {
        b.iter(|| extract_with_options(black_box(COMMENTED_HTML), black_box(&options)));
    });
}

/// Benchmark with saved profile pages of varying sizes
fn bench_saved_profiles(c: &mut Criterion) {
    let html_dir = "../data/profiles";
    let sample_files = ["profile_small.html", "profile_medium.html", "profile_large.html"];

    let mut group = c.benchmark_group("saved_profiles");

    for filename in &sample_files {
        let path = format!("{html_dir}/{filename}");
        if let Ok(html) = fs::read_to_string(&path) {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("extract", format!("{filename} ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| extract(black_box(html)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_profile,
    bench_extract_commented,
    bench_extract_without_fallbacks,
    bench_saved_profiles
);
criterion_main!(benches);
