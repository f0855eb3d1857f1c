//! Performance benchmarks for the hyphenation pipeline
//!
//! Run with: cargo bench --bench hyphenation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use viram_core::{hyphenate, Hyphenator};

/// Mixed-script running text of roughly the requested byte size.
fn generate_text(target: usize) -> String {
    let base = "തിരുവനന്തപുരം ಬೆಂಗಳೂರು హైదరాబాదు திருவனந்தபுரம் ଭୁବନେଶ୍ୱର. ";
    base.repeat(target / base.len() + 1)
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyphenate");

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed_scripts", size), &text, |b, text| {
            b.iter(|| hyphenate(black_box(text)));
        });
    }

    group.finish();
}

fn bench_markers(c: &mut Criterion) {
    let text = generate_text(10_240);
    let visible = Hyphenator::with_marker('-');

    c.bench_function("hyphenate_visible_marker", |b| {
        b.iter(|| visible.hyphenate(black_box(&text)));
    });
}

criterion_group!(benches, bench_text_sizes, bench_markers);
criterion_main!(benches);
