// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use almanac_picker::{Intent, Navigation, PickerConfig, PickerStore};
use chrono::NaiveDate;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn store(month_count: u32) -> PickerStore {
    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    PickerStore::new(PickerConfig::new().with_month_count(month_count), today).unwrap()
}

fn bench_day_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker/next_day");

    // Walks a full year of days; every month boundary pages and flushes.
    for month_count in [1u32, 3] {
        group.bench_with_input(
            BenchmarkId::new("year", month_count),
            &month_count,
            |b, &month_count| {
                b.iter_batched(
                    || store(month_count),
                    |mut store| {
                        for _ in 0..366 {
                            let outcome = store.dispatch(Intent::Navigate(Navigation::NextDay));
                            if outcome.deferred {
                                store.flush_deferred();
                            }
                        }
                        black_box(store.snapshot().focused);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_month_jumps(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker/next_month");

    group.bench_function("decade", |b| {
        b.iter_batched(
            || store(1),
            |mut store| {
                for _ in 0..120 {
                    store.dispatch(Intent::Navigate(Navigation::NextMonth));
                    store.flush_deferred();
                }
                black_box(store.snapshot().month);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_day_steps, bench_month_jumps);
criterion_main!(benches);
