//! Benchmarks for eventdate-core.
//!
//! Run with: `cargo bench -p eventdate-core`
//!
//! Results are saved to `target/criterion/` with HTML reports.

use chrono::DateTime;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eventdate_core::EventDateParser;

/// Benchmark inputs representing common scraped candidates.
struct BenchmarkInputs {
    /// Machine-readable timestamp
    iso: &'static str,
    /// US slash date with time
    numeric: &'static str,
    /// Month-name date
    month_name: &'static str,
    /// Relative keyword
    relative: &'static str,
    /// Weekday phrase
    weekday: &'static str,
    /// Bare clock time
    bare_time: &'static str,
    /// Text that falls through the whole cascade
    garbage: &'static str,
}

const INPUTS: BenchmarkInputs = BenchmarkInputs {
    iso: "2024-02-20T19:30:00-06:00",
    numeric: "2/20/2024 7:30 PM",
    month_name: "February 20, 2024",
    relative: "tomorrow at 2pm",
    weekday: "next friday",
    bare_time: "7:30 PM",
    garbage: "doors open half an hour before the show",
};

fn bench_parse(c: &mut Criterion) {
    let parser = EventDateParser::new();
    let reference = DateTime::parse_from_rfc3339("2024-01-15T12:00:00-06:00").unwrap();

    let mut group = c.benchmark_group("parse");

    let inputs = [
        ("iso", INPUTS.iso),
        ("numeric", INPUTS.numeric),
        ("month_name", INPUTS.month_name),
        ("relative", INPUTS.relative),
        ("weekday", INPUTS.weekday),
        ("bare_time", INPUTS.bare_time),
        ("garbage", INPUTS.garbage),
    ];

    for (name, input) in inputs {
        group.bench_function(name, |b| {
            b.iter(|| parser.parse(black_box(input), black_box(reference)))
        });
    }

    group.finish();
}

fn bench_parse_many(c: &mut Criterion) {
    let parser = EventDateParser::new();
    let reference = DateTime::parse_from_rfc3339("2024-01-15T12:00:00-06:00").unwrap();

    // The usual shape: one precise attribute plus a few loose labels.
    let candidates = [
        INPUTS.weekday,
        INPUTS.iso,
        INPUTS.garbage,
        INPUTS.bare_time,
    ];

    c.bench_function("parse_many", |b| {
        b.iter(|| parser.parse_many(black_box(&candidates), black_box(reference)))
    });
}

criterion_group!(benches, bench_parse, bench_parse_many);
criterion_main!(benches);
