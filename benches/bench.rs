//! Criterion benchmarks for the Xiphos search engine.
//!
//! Covers the hot paths: sorted posting-list insertion, the two-pointer
//! set algebra, batch index construction, and ranked query evaluation.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use xiphos::engine::SearchEngine;
use xiphos::index::{algebra, DocId, IndexBuilder, IndexKind, PostingList};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<(DocId, Vec<String>)> {
    let words = [
        "search", "engine", "full", "text", "index", "query", "document", "term", "phrase",
        "boolean", "posting", "relevance", "score", "ranking", "market", "stock", "report",
        "weather", "news", "trade",
    ];

    (0..count)
        .map(|i| {
            let doc_length = 20 + (i % 30);
            let tokens = (0..doc_length)
                .map(|j| words[(i * 7 + j * 13) % words.len()].to_string())
                .collect();
            (i as DocId, tokens)
        })
        .collect()
}

fn sorted_ids(count: usize, step: usize) -> Vec<DocId> {
    (0..count).map(|i| (i * step) as DocId).collect()
}

fn bench_posting_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("posting_insert");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("insert_10k_shuffled", |b| {
        // A fixed pseudo-shuffle, worst case for the insertion shift.
        let ids: Vec<DocId> = (0..10_000u32)
            .map(|i| i.wrapping_mul(2_654_435_761) >> 16)
            .collect();
        b.iter(|| {
            let mut list = PostingList::new();
            for &id in &ids {
                list.insert(id);
            }
            black_box(list.len())
        });
    });

    group.finish();
}

fn bench_set_algebra(c: &mut Criterion) {
    let a = sorted_ids(100_000, 2);
    let b_list = sorted_ids(100_000, 3);

    let mut group = c.benchmark_group("set_algebra");
    group.throughput(Throughput::Elements(200_000));

    group.bench_function("intersect_100k", |b| {
        b.iter(|| black_box(algebra::intersect(&a, &b_list)))
    });
    group.bench_function("union_100k", |b| {
        b.iter(|| black_box(algebra::union(&a, &b_list)))
    });
    group.bench_function("difference_100k", |b| {
        b.iter(|| black_box(algebra::difference(&a, &b_list)))
    });

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let documents = generate_test_documents(1_000);

    let mut group = c.benchmark_group("index_build");
    group.throughput(Throughput::Elements(documents.len() as u64));

    group.bench_function("positional_1k_docs", |b| {
        b.iter(|| {
            let mut builder = IndexBuilder::new(IndexKind::Positional);
            for (doc_id, tokens) in &documents {
                builder.add_document(*doc_id, tokens);
            }
            black_box(builder.finish())
        });
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let engine =
        SearchEngine::build_from_tokens(IndexKind::Positional, generate_test_documents(5_000));

    let mut group = c.benchmark_group("queries");

    group.bench_function("boolean_and", |b| {
        b.iter(|| black_box(engine.search_boolean("stock AND market").unwrap()))
    });
    group.bench_function("phrase", |b| {
        b.iter(|| black_box(engine.search("\"stock market\"").unwrap()))
    });
    group.bench_function("free_text_ranked", |b| {
        b.iter(|| black_box(engine.search("stock market report").unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_posting_insert,
    bench_set_algebra,
    bench_index_build,
    bench_queries
);
criterion_main!(benches);
