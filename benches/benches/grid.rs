// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use almanac_calendar::{DateBounds, YearMonth, describe_month, generate_grid};
use almanac_picker::{PickerConfig, Viewport};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_generate_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar/generate_grid");

    // A decade of months, every start-of-week column.
    let months: Vec<YearMonth> = (0..120).map(|i| YearMonth::new(2020, 0).offset(i)).collect();
    group.throughput(Throughput::Elements(months.len() as u64 * 7));

    for fixed_weeks in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("fixed_weeks", fixed_weeks),
            &months,
            |b, months| {
                b.iter(|| {
                    for month in months {
                        for start_of_week in 0..7 {
                            black_box(generate_grid(*month, start_of_week, fixed_weeks));
                        }
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_describe_month(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar/describe_month");
    let month = YearMonth::new(2024, 1);
    let bounds = DateBounds::new(
        NaiveDate::from_ymd_opt(2024, 2, 5),
        NaiveDate::from_ymd_opt(2024, 2, 25),
    );
    let today = NaiveDate::from_ymd_opt(2024, 2, 14);

    group.bench_function("bounded", |b| {
        b.iter(|| black_box(describe_month(month, 1, true, &bounds, today)));
    });

    group.finish();
}

fn bench_viewport_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker/viewport_build");

    for month_count in [1u32, 3, 12] {
        let config = PickerConfig::new().with_month_count(month_count);
        group.throughput(Throughput::Elements(u64::from(month_count)));
        group.bench_with_input(
            BenchmarkId::from_parameter(month_count),
            &config,
            |b, config| {
                b.iter(|| black_box(Viewport::build(YearMonth::new(2024, 0), config, None)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_grid,
    bench_describe_month,
    bench_viewport_build
);
criterion_main!(benches);
