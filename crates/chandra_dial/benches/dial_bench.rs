use std::time::Instant;

use chandra_dial::{Dial, DialConfig, DialEvent, FixedClock, PointerSample, SceneRect};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn dial_at(date: NaiveDate) -> Dial<FixedClock> {
    Dial::starting_at(DialConfig::default(), FixedClock(date), date)
}

fn snapshot_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap_or_default();
    let dial = dial_at(date);

    let mut group = c.benchmark_group("dial");
    group.bench_function("snapshot", |b| b.iter(|| black_box(dial.snapshot())));
    group.finish();
}

fn drag_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap_or_default();
    let rect = SceneRect::square(800.0);
    let now = Instant::now();

    let mut group = c.benchmark_group("drag");
    group.bench_function("press_move_release", |b| {
        b.iter(|| {
            let mut dial = dial_at(date);
            let _ = dial.handle(
                DialEvent::PointerDown(PointerSample::at_polar(rect, 310.0, 0.0)),
                now,
            );
            let _ = dial.handle(
                DialEvent::PointerMove(PointerSample::at_polar(rect, 310.0, black_box(73.0))),
                now,
            );
            let _ = dial.handle(DialEvent::PointerUp, now);
            dial.selected()
        })
    });
    group.finish();
}

criterion_group!(benches, snapshot_bench, drag_bench);
criterion_main!(benches);
