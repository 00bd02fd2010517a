//! Performance benchmarks for the labour report pipeline.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use labour_report::calculation::{build_report, parse_break};
use labour_report::config::ReportConfig;
use labour_report::models::{DecimalHour, SaleRecord, ShiftRecord};

const BREAK_NOTES: [&str; 6] = [
    "12-1pm",
    "15-18",
    "4.30-5pm",
    "19:00-19:30",
    "1.00 - 1.30 PM",
    "100-130",
];

/// Creates `count` shifts with staggered starts and varied break notations.
fn create_shifts(count: usize) -> Vec<ShiftRecord> {
    (0..count)
        .map(|i| {
            let start = 6 + (i % 6);
            let end = start + 8;
            ShiftRecord::new(
                &format!("{:02}:{:02}", start, (i * 15) % 60),
                &format!("{:02}:00", end),
                BREAK_NOTES[i % BREAK_NOTES.len()],
                &format!("{}.50", 10 + i % 20),
            )
        })
        .collect()
}

/// Creates `count` sales spread over the trading day.
fn create_sales(count: usize) -> Vec<SaleRecord> {
    (0..count)
        .map(|i| {
            SaleRecord::new(
                &format!("{:02}:{:02}", 6 + i % 17, (i * 7) % 60),
                &format!("{}.{:02}", 5 + i % 200, i % 100),
            )
        })
        .collect()
}

fn bench_parse_break(c: &mut Criterion) {
    let shift_start = DecimalHour::from_hm(9, 0);

    let mut group = c.benchmark_group("parse_break");
    for notes in BREAK_NOTES {
        group.bench_with_input(BenchmarkId::from_parameter(notes), notes, |b, notes| {
            b.iter(|| parse_break(black_box(notes), shift_start))
        });
    }
    group.finish();
}

fn bench_single_day(c: &mut Criterion) {
    let config = ReportConfig::default();
    let shifts = create_shifts(10);
    let sales = create_sales(500);

    c.bench_function("single_day", |b| {
        b.iter(|| build_report(black_box(&shifts), black_box(&sales), &config))
    });
}

/// Benchmark: Various table sizes to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let config = ReportConfig::default();

    let mut group = c.benchmark_group("scaling");
    for shift_count in [1, 10, 100, 1000] {
        let shifts = create_shifts(shift_count);
        let sales = create_sales(shift_count * 50);

        group.throughput(Throughput::Elements(shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            &shift_count,
            |b, _| b.iter(|| build_report(black_box(&shifts), black_box(&sales), &config)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse_break, bench_single_day, bench_scaling);
criterion_main!(benches);
