use criterion::{Criterion, criterion_group, criterion_main};
use mdscribe_engine::{ParseOptions, parse, parsing::inline::parse_inline};
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let options = ParseOptions::default();
    for size in [10, 100] {
        let content = common::generate_markdown_content(size);
        group.bench_function(format!("document_{size}"), |b| {
            b.iter(|| {
                let doc = parse(std::hint::black_box(&content), &options);
                std::hint::black_box(doc);
            });
        });
    }

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let content = common::generate_inline_heavy(200);
    c.bench_function("inline_tokens", |b| {
        b.iter(|| std::hint::black_box(parse_inline(std::hint::black_box(&content))));
    });
}

criterion_group!(benches, bench_parse_document, bench_inline);
criterion_main!(benches);
