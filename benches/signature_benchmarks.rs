//! Criterion benchmarks for signature extraction and comparison.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kenning_rs::{compare_signatures, rank_candidates, Signature, SignatureExtractor};

fn synthetic_corpus(paragraphs: usize) -> Vec<String> {
    let stanza = [
        "The time has come, the Walrus said\n",
        "To talk of many things: of shoes - and ships - and sealing wax,\n",
        "Of cabbages; and kings.\n",
        "And why the sea is boiling hot;\n",
        "and whether pigs have wings.\n",
    ];
    (0..paragraphs)
        .flat_map(|_| stanza.iter().map(|line| (*line).to_string()))
        .collect()
}

fn bench_signature_extraction(c: &mut Criterion) {
    let extractor = SignatureExtractor::default();
    let corpus = synthetic_corpus(200);

    c.bench_function("extract_signature_1k_lines", |b| {
        b.iter(|| extractor.extract(black_box(&corpus), "walrus").unwrap());
    });
}

fn bench_comparison(c: &mut Criterion) {
    let sig1 = Signature::new("a", [4.4, 0.1, 0.05, 10.0, 2.0]);
    let sig2 = Signature::new("b", [4.3, 0.1, 0.04, 16.0, 4.0]);
    let weights = [0.0, 11.0, 33.0, 50.0, 0.4, 4.0];

    c.bench_function("compare_signatures", |b| {
        b.iter(|| compare_signatures(black_box(&sig1), black_box(&sig2), &weights).unwrap());
    });

    let candidates: Vec<Signature> = (0..500)
        .map(|i| {
            let offset = f64::from(i) * 0.01;
            Signature::new(
                format!("candidate_{i}"),
                [4.0 + offset, 0.1, 0.05, 10.0 + offset, 2.0],
            )
        })
        .collect();

    c.bench_function("rank_500_candidates", |b| {
        b.iter(|| rank_candidates(black_box(&sig1), black_box(&candidates), &weights).unwrap());
    });
}

criterion_group!(benches, bench_signature_extraction, bench_comparison);
criterion_main!(benches);
