//! Criterion benchmarks for synotrie.
//!
//! Covers the main operations on a trie built from a generated vocabulary:
//! - Insertion, with and without synonym groups
//! - Lookup
//! - Proximity iteration over one and several prefixes
//! - Pattern compilation and matching
//! - The dense ASCII trie

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::json;
use synotrie::ascii::AsciiTrie;
use synotrie::document::object_ref::ObjectRef;
use synotrie::document::par_object_list_to_trie;
use synotrie::iterate::IterateOptions;
use synotrie::pattern::MatchMode;
use synotrie::trie::{Trie, TrieOptions};

/// Generate lowercase pseudo-words for benchmarking.
fn generate_words(count: usize) -> Vec<String> {
    let syllables = [
        "ta", "te", "thi", "st", "ing", "er", "ra", "no", "mi", "ko", "su", "phe", "lu", "dra",
    ];

    (0..count)
        .map(|i| {
            let length = 2 + (i % 4);
            (0..length)
                .map(|j| syllables[(i * 7 + j * 13 + i / 11) % syllables.len()])
                .collect::<String>()
        })
        .collect()
}

fn synonym_groups() -> Vec<Vec<&'static str>> {
    vec![vec!["th", "t"], vec!["ph", "f"], vec!["k", "c"]]
}

/// Benchmark trie construction.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let words = generate_words(10_000);
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("plain", |b| {
        b.iter(|| {
            let trie = Trie::<()>::from_words(black_box(&words));
            black_box(trie.len())
        })
    });

    group.bench_function("with_synonyms", |b| {
        b.iter(|| {
            let trie = Trie::<()>::from_words_with_synonyms(synonym_groups(), black_box(&words))
                .unwrap();
            black_box(trie.len())
        })
    });

    group.bench_function("with_values", |b| {
        b.iter(|| {
            let trie = Trie::from_pairs(words.iter().enumerate().map(|(i, w)| (w, i % 97)));
            black_box(trie.len())
        })
    });

    group.finish();
}

/// Benchmark word classification.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let words = generate_words(10_000);
    let probes: Vec<String> = words
        .iter()
        .step_by(10)
        .map(|w| w[..w.len() / 2].to_string())
        .chain(words.iter().step_by(10).cloned())
        .collect();
    group.throughput(Throughput::Elements(probes.len() as u64));

    let plain = Trie::<()>::from_words(&words);
    group.bench_function("plain", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(plain.lookup(black_box(probe)));
            }
        })
    });

    let synonyms = Trie::<()>::from_words_with_synonyms(synonym_groups(), &words).unwrap();
    group.bench_function("with_synonyms", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(synonyms.lookup(black_box(probe)));
            }
        })
    });

    let ascii = AsciiTrie::new(&words).unwrap();
    group.bench_function("ascii", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(ascii.lookup(black_box(probe)));
            }
        })
    });

    group.finish();
}

/// Benchmark proximity iteration.
fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let words = generate_words(10_000);
    let trie = Trie::from_pairs(words.iter().enumerate().map(|(i, w)| (w, i % 500)));

    for prefixes in [vec!["ta"], vec!["ta", "te"], vec!["ta", "te", "thi"]] {
        group.bench_with_input(
            BenchmarkId::new("prefixes", prefixes.len()),
            &prefixes,
            |b, prefixes| {
                b.iter(|| {
                    let count = trie
                        .iter_values(IterateOptions::new().prefixes(prefixes.iter().copied()))
                        .unwrap()
                        .count();
                    black_box(count)
                })
            },
        );
    }

    group.bench_function("first_ten", |b| {
        b.iter(|| {
            let first: Vec<_> = trie
                .iter_values(IterateOptions::new())
                .unwrap()
                .take(10)
                .map(|m| *m.value)
                .collect();
            black_box(first)
        })
    });

    group.finish();
}

/// Benchmark pattern compilation and matching.
fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");
    let words = generate_words(2_000);
    let trie = Trie::<()>::from_words(&words);

    for mode in [MatchMode::Partial, MatchMode::Perfect, MatchMode::Classify] {
        group.bench_with_input(BenchmarkId::new("compile", mode), &mode, |b, mode| {
            b.iter(|| black_box(trie.to_pattern(*mode).unwrap()))
        });
    }

    let classify = trie.to_pattern(MatchMode::Classify).unwrap();
    group.bench_function("classify", |b| {
        b.iter(|| {
            for word in words.iter().step_by(20) {
                black_box(classify.classify(black_box(word)).unwrap());
            }
        })
    });

    group.finish();
}

/// Benchmark document indexing.
fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("documents");
    let words = generate_words(5_000);
    let objects: Vec<ObjectRef> = words
        .chunks(5)
        .map(|chunk| ObjectRef::new(json!({"title": chunk[0], "body": chunk[1..].join(" ")})))
        .collect();
    group.throughput(Throughput::Elements(objects.len() as u64));

    group.bench_function("par_object_list_to_trie", |b| {
        b.iter(|| {
            let trie = par_object_list_to_trie(
                black_box(&objects),
                synonym_groups(),
                TrieOptions::default(),
            )
            .unwrap();
            black_box(trie.len())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_lookup,
    bench_iterate,
    bench_pattern,
    bench_documents
);
criterion_main!(benches);
