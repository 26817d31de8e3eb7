//! Criterion benchmark for the SAR scan hot path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modsar_core::domain::Bar;
use modsar_core::sar::ModifiedSar;

fn make_bars(n: usize) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
            }
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("sar_compute");
    for n in [252, 1260, 5040] {
        let bars = make_bars(n);
        let sar = ModifiedSar::default_params();
        group.bench_with_input(BenchmarkId::from_parameter(n), &bars, |b, bars| {
            b.iter(|| sar.compute(black_box(bars)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
