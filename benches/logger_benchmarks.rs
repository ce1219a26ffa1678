//! Criterion benchmarks for sink_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sink_logger::core::RecordFormatter;
use sink_logger::prelude::*;
use std::io;

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let formatter = RecordFormatter::new();

    group.bench_function("short", |b| {
        b.iter(|| {
            formatter.format(
                Severity::Info,
                None,
                format_args!("{}", black_box("short message")),
            )
        });
    });

    group.bench_function("tagged_with_args", |b| {
        b.iter(|| {
            formatter.format(
                Severity::Warn,
                Some("connect"),
                format_args!(
                    "peer {} failed after {} attempts",
                    black_box("10.0.0.1:9001"),
                    black_box(3)
                ),
            )
        });
    });

    let huge = "x".repeat(64 * 1024);
    group.bench_function("truncated", |b| {
        b.iter(|| {
            formatter.format(Severity::Error, None, format_args!("{}", black_box(&huge)))
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    for sink_count in [1usize, 4, 16] {
        let mut logger = Logger::builder().program("bench", "0").build();
        for i in 0..sink_count {
            logger
                .add_stream_sink(Severity::Debug, Severity::Error, &format!("sink{i}"), io::sink())
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::new("stream_sinks", sink_count), &sink_count, |b, _| {
            b.iter(|| {
                logger.emit(Severity::Notice, format_args!("{}", black_box("dispatch")))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    group.throughput(Throughput::Elements(1));

    let mut logger = Logger::builder().program("bench", "0").build();
    logger
        .add_stream_sink(Severity::Warn, Severity::Error, "quiet", io::sink())
        .unwrap();

    group.bench_function("below_every_floor", |b| {
        b.iter(|| logger.emit(Severity::Debug, format_args!("{}", black_box("skipped"))));
    });

    group.bench_function("minimum_configured_severity", |b| {
        b.iter(|| black_box(logger.minimum_configured_severity()));
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_dispatch, bench_filtering);
criterion_main!(benches);
