//! Benchmarks for Karnaugh map simplification
//!
//! Every one of the 256 three-variable functions is simplified under both pair
//! policies, then the surrounding pipeline (rendering, parsing, PLA) is measured
//! on the same domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmap_logic::{
    MintermMask, PLAReader, PLAWriter, PairPolicy, Report, Simplifier, SimplifyConfig, Sop,
};

fn all_masks() -> Vec<MintermMask> {
    (0..=255u8).map(MintermMask::from_bits).collect()
}

/// Benchmark: simplify every mask under each pair policy
fn bench_simplify(c: &mut Criterion) {
    let masks = all_masks();
    let mut group = c.benchmark_group("simplify");
    group.throughput(Throughput::Elements(masks.len() as u64));

    for policy in [PairPolicy::Lenient, PairPolicy::Strict] {
        let simplifier = Simplifier::new(SimplifyConfig::default().with_pair_policy(policy));
        group.bench_with_input(
            BenchmarkId::new("all_masks", policy),
            &masks,
            |b, masks| {
                b.iter(|| {
                    for &mask in masks {
                        black_box(simplifier.simplify(black_box(mask)));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: build the full report including truth table and rendered text
fn bench_report(c: &mut Criterion) {
    let masks = all_masks();
    let config = SimplifyConfig::default();
    let mut group = c.benchmark_group("report");
    group.throughput(Throughput::Elements(masks.len() as u64));

    group.bench_function("from_mask", |b| {
        b.iter(|| {
            for &mask in &masks {
                black_box(Report::from_mask(black_box(mask), &config));
            }
        });
    });

    group.finish();
}

/// Benchmark: parse rendered expressions back into masks
fn bench_parse_sop(c: &mut Criterion) {
    let simplifier = Simplifier::default();
    let expressions: Vec<String> = all_masks()
        .into_iter()
        .map(|mask| simplifier.simplify(mask).to_string())
        .collect();

    let mut group = c.benchmark_group("parse_sop");
    group.throughput(Throughput::Elements(expressions.len() as u64));

    group.bench_function("simplified", |b| {
        b.iter(|| {
            for expr in &expressions {
                let sop = Sop::parse(black_box(expr)).unwrap();
                black_box(sop.mask());
            }
        });
    });

    group.finish();
}

/// Benchmark: PLA serialisation of simplified covers
fn bench_pla(c: &mut Criterion) {
    let simplifier = Simplifier::default();
    let covers: Vec<_> = all_masks()
        .into_iter()
        .map(|mask| simplifier.simplify(mask))
        .collect();
    let documents: Vec<String> = covers
        .iter()
        .map(|cover| cover.to_pla_string().unwrap())
        .collect();

    let mut group = c.benchmark_group("pla");
    group.throughput(Throughput::Elements(covers.len() as u64));

    group.bench_function("write", |b| {
        b.iter(|| {
            for cover in &covers {
                black_box(cover.to_pla_string().unwrap());
            }
        });
    });

    group.bench_function("read", |b| {
        b.iter(|| {
            for doc in &documents {
                black_box(MintermMask::from_pla_string(black_box(doc)).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_simplify, bench_report, bench_parse_sop, bench_pla);
criterion_main!(benches);
