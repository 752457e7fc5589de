//! Criterion benchmarks for glog

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glog::core::printf::sprintf;
use glog::prelude::*;
use glog::Record;
use std::sync::Arc;

fn null_logger(format: &str, level: LogLevel) -> Logger {
    Logger::with_config(
        "bench",
        Config::builder()
            .format(format)
            .level(level)
            .handler(WriterSink::new("null", std::io::sink()))
            .build(),
    )
}

fn reference_time() -> Timestamp {
    Utc.with_ymd_and_hms(2009, 11, 17, 20, 34, 58)
        .single()
        .expect("valid reference time")
        .into()
}

// ============================================================================
// Date Formatting Benchmarks
// ============================================================================

fn bench_date_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_format");
    group.throughput(Throughput::Elements(1));

    let ts = reference_time();

    group.bench_function("default", |b| {
        b.iter(|| black_box(ts.format(black_box(DEFAULT_DATE_FORMAT))));
    });

    group.bench_function("every_directive", |b| {
        b.iter(|| black_box(ts.format(black_box("%a %A %w %d %b %B %m %y %Y %H %I %p %M %S %f %z %Z %j %W"))));
    });

    group.bench_function("now", |b| {
        b.iter(|| black_box(Timestamp::now()));
    });

    group.finish();
}

// ============================================================================
// Layout Benchmarks
// ============================================================================

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.throughput(Throughput::Elements(1));

    let ts = reference_time();
    let record = Record {
        name: "bench",
        level: LogLevel::INFO,
        message: "Benchmark message\n",
        timestamp: &ts,
    };

    group.bench_function("parse", |b| {
        b.iter(|| black_box(Layout::parse(black_box(DEFAULT_FORMAT))));
    });

    let layout = Layout::parse(DEFAULT_FORMAT);
    group.bench_function("render", |b| {
        b.iter(|| black_box(layout.render(&record, DEFAULT_DATE_FORMAT, "bench::render")));
    });

    group.bench_function("sprintf", |b| {
        b.iter(|| black_box(sprintf("%20s | %-8s | %s", black_box(&["bench", "INFO", "message"]))));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(DEFAULT_FORMAT, LogLevel::DEBUG);

    group.bench_function("macro", |b| {
        b.iter(|| glog::info!(logger, "Benchmark {}", black_box(42)));
    });

    group.bench_function("method", |b| {
        b.iter(|| logger.info(black_box("Benchmark message")));
    });

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.log(LogLevel::NOTSET, "bench", black_box("Filtered")));
    });

    logger.silence(true);
    group.bench_function("silenced", |b| {
        b.iter(|| logger.critical(black_box("Silenced")));
    });

    group.bench_function("memory_sink", |b| {
        let sink = MemorySink::new();
        let logger = Logger::with_config(
            "bench",
            Config::builder().format("%(l)s %(m)s").handler(sink.clone()).build(),
        );
        b.iter(|| {
            logger.info(black_box("Buffered")).ok();
            sink.clear();
        });
    });

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let registry = Arc::new(Registry::with_config(
        Config::builder()
            .handler(WriterSink::new("null", std::io::sink()))
            .build(),
    ));

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let registry = Arc::clone(&registry);
                    std::thread::spawn(move || {
                        let log = registry.logger("concurrent");
                        glog::info!(log, "Concurrent message").ok();
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.bench_function("reconfigure", |b| {
        b.iter(|| {
            registry.config().update(|config| config.level = black_box(LogLevel::INFO));
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_date_format,
    bench_layout,
    bench_dispatch,
    bench_concurrent_logging
);

criterion_main!(benches);
