use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vesting_core::{generate_series, UnlockInterval};

const DAY: i64 = 86_400_000;

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_series");
    // (span, interval): one at the density cap, one that trips the fallback table
    let cases = [
        ("week_hourly", 7 * DAY, UnlockInterval::Hour.as_millis()),
        ("at_cap", 2_800 * UnlockInterval::Minute.as_millis(), UnlockInterval::Minute.as_millis()),
        ("year_per_second", 365 * DAY, UnlockInterval::Second.as_millis()),
    ];
    for (name, span, interval) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(span, interval), |b, &(span, interval)| {
            b.iter(|| black_box(generate_series(0, span, interval, Some(1_000_000.0))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_series);
criterion_main!(benches);
