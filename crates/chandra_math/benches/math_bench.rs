use chandra_math::{
    Phase, clock_angle, day_from_rotation, lunar_age, lunar_day_for_date, moon_shape,
    moonrise_time, ring_layout,
};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn age_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap_or_default();

    let mut group = c.benchmark_group("age");
    group.bench_function("lunar_age", |b| b.iter(|| lunar_age(black_box(date))));
    group.bench_function("lunar_day_for_date", |b| {
        b.iter(|| lunar_day_for_date(black_box(date)))
    });
    group.finish();
}

fn dial_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dial");
    group.bench_function("moonrise_time", |b| {
        b.iter(|| moonrise_time(Phase::Waning, black_box(11)))
    });
    group.bench_function("clock_angle", |b| {
        b.iter(|| clock_angle(black_box(2), black_box(34), Phase::Waning))
    });
    group.bench_function("moon_shape", |b| {
        b.iter(|| moon_shape(black_box(0.4), Phase::Waxing, 26.0))
    });
    group.finish();
}

fn disc_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("disc");
    group.bench_function("day_from_rotation", |b| {
        b.iter(|| day_from_rotation(black_box(-213.7)))
    });
    group.bench_function("ring_layout", |b| {
        b.iter(|| ring_layout(black_box(-48.0), 310.0))
    });
    group.finish();
}

criterion_group!(benches, age_bench, dial_bench, disc_bench);
criterion_main!(benches);
