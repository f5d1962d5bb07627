//! Benchmarks the full battery through a silent sink.
//!
//! The sink discards boundary signals so criterion measures the battery's own
//! cost, not reporting overhead.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use criterion::{Criterion, criterion_group, criterion_main};
use heap_tally::{Allocator, Snapshot};
use list_battery::{BatteryConfig, ScenarioInfo, Sink, run_battery, run_scenario};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

#[derive(Debug)]
struct SilentSink;

impl Sink for SilentSink {
    fn begin_scenario(&mut self, _scenario: &ScenarioInfo<'_>) {}
    fn end_scenario(&mut self, _stats: Snapshot) {}
    fn begin_test(&mut self, _name: &str) {}
    fn end_test(&mut self) {}
    fn counting_error(&mut self, _message: &str) {}
}

fn entrypoint(c: &mut Criterion) {
    let config = BatteryConfig::new(1000, 1);

    let mut group = c.benchmark_group("battery");

    group.bench_function("integer_scenario", |b| {
        let mut sink = SilentSink;
        b.iter(|| run_scenario::<i32>(&config, &mut sink));
    });

    group.bench_function("string_scenario", |b| {
        let mut sink = SilentSink;
        b.iter(|| run_scenario::<String>(&config, &mut sink));
    });

    group.bench_function("full_battery", |b| {
        let mut sink = SilentSink;
        b.iter(|| run_battery(&config, &mut sink));
    });

    group.finish();
}
