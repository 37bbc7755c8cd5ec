use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqview::{
    format_nullable_view, format_view, from_fn, inspect, to_string, FormatTokens, Frame, Limit,
    TracePrinter, ValueOf, ViewRange,
};

fn numbers(len: usize) -> Vec<u64> {
    (0..len as u64).map(|n| n * 7919 % 10_007).collect()
}

fn benchmark_whole_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("whole_sequence");
    for len in [10usize, 100, 1_000, 10_000] {
        let seq = numbers(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &seq, |b, seq| {
            b.iter(|| to_string(black_box(seq)))
        });
    }
    group.finish();
}

fn benchmark_bounded_views(c: &mut Criterion) {
    let seq = numbers(10_000);
    let tokens = FormatTokens::default();
    let views = [
        ("first", ViewRange::first()),
        ("window_100", ViewRange::window(4_000, 4_099)),
        ("tail_10", ViewRange::limit(9, Limit::ToLast)),
        ("clamped", ViewRange::window(-500, 50_000)),
    ];

    let mut group = c.benchmark_group("bounded_views");
    for (name, view) in views {
        group.bench_function(name, |b| {
            b.iter(|| format_view(black_box(&seq), &view, &ValueOf, &tokens))
        });
    }
    group.finish();
}

fn benchmark_mappings(c: &mut Criterion) {
    let seq = numbers(1_000);
    let sparse: Vec<Option<u64>> = seq.iter().map(|&n| (n % 3 != 0).then_some(n)).collect();
    let hex = from_fn(|n: &u64| format!("{n:#x}"));
    let tokens = FormatTokens::joined(" ");

    c.bench_function("mapping_closure", |b| {
        b.iter(|| format_view(black_box(&seq), &ViewRange::all(), &hex, &tokens))
    });
    c.bench_function("mapping_nullable", |b| {
        b.iter(|| format_nullable_view(black_box(&sparse), &ViewRange::all(), &tokens))
    });
}

fn benchmark_diagnostics(c: &mut Criterion) {
    let seq = numbers(1_000);
    let frames: Vec<Frame> = (0..32)
        .map(|depth| Frame::new(format!("frame_{depth}")).with_location("src/lib.rs", depth))
        .collect();
    let printer = TracePrinter::new();

    c.bench_function("inspect_1000", |b| b.iter(|| inspect(Some(black_box(&seq[..])))));
    c.bench_function("trace_32_frames", |b| {
        b.iter(|| printer.render_all(black_box(&frames)))
    });
}

criterion_group!(
    benches,
    benchmark_whole_sequence,
    benchmark_bounded_views,
    benchmark_mappings,
    benchmark_diagnostics
);
criterion_main!(benches);
