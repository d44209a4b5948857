// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use std::time::Duration;
use vitrine::app::markup;
use vitrine::runtime::Scheduler;
use vitrine::ui::notifications::{Kind, Manager, NotificationTask, Timings};

fn run_to_completion(manager: &mut Manager, count: usize) {
    let mut doc = markup::showcase_page();
    let mut scheduler: Scheduler<NotificationTask> = Scheduler::new();
    for index in 0..count {
        let kind = if index % 2 == 0 { Kind::Success } else { Kind::Error };
        manager.show(&mut doc, &mut scheduler, "Benchmark message", kind);
    }
    while let Some(task) = scheduler.pop_due(Duration::from_secs(60)) {
        manager.handle_task(&mut doc, &mut scheduler, task);
    }
    black_box(manager.visible_count());
}

fn notification_lifecycle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_lifecycle");

    for count in [1, 10, 100] {
        group.bench_function(format!("show_and_expire_{count}"), |b| {
            b.iter_batched(
                || Manager::new(Timings::default()),
                |mut manager| run_to_completion(&mut manager, count),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, notification_lifecycle_benchmark);
criterion_main!(benches);
