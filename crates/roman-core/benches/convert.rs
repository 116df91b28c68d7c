use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roman_core::{is_valid, to_number, to_roman};

const SAMPLES: &[i64] = &[1, 14, 1984, 3888, 4999];

fn bench_to_roman(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_roman");
    for &n in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| to_roman(black_box(n)))
        });
    }
    group.finish();
}

fn bench_to_number(c: &mut Criterion) {
    let numerals: Vec<String> = SAMPLES.iter().map(|&n| to_roman(n).unwrap()).collect();
    let mut group = c.benchmark_group("to_number");
    for numeral in &numerals {
        group.bench_with_input(BenchmarkId::from_parameter(numeral), numeral, |b, s| {
            b.iter(|| to_number(black_box(s)))
        });
    }
    group.finish();
}

fn bench_is_valid(c: &mut Criterion) {
    c.bench_function("is_valid/MMMDCCCLXXXVIII", |b| {
        b.iter(|| is_valid(black_box("MMMDCCCLXXXVIII")))
    });
    c.bench_function("is_valid/reject", |b| {
        b.iter(|| is_valid(black_box("MMMMMDCCCLXXXVIIII")))
    });
}

criterion_group!(benches, bench_to_roman, bench_to_number, bench_is_valid);
criterion_main!(benches);
