//! End-to-end allocation accounting for full scenarios.
//!
//! This is the only test in this binary on purpose: the scenario runner
//! resets the process-wide counters and asserts exact alloc/free balance,
//! which only holds when nothing else allocates during the window.

#![cfg(not(miri))] // Miri replaces the global allocator, so cannot be used here.

use heap_tally::{Allocator, Snapshot};
use list_battery::{BatteryConfig, ScenarioInfo, Sink, run_battery};

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

/// Records only the end-of-scenario statistics, without allocating inside
/// the measurement window (the vector capacity is reserved up front and
/// `Snapshot` is `Copy`).
#[derive(Debug)]
struct StatsOnlySink {
    scenarios: Vec<Snapshot>,
}

impl StatsOnlySink {
    fn new() -> Self {
        Self {
            scenarios: Vec::with_capacity(8),
        }
    }
}

impl Sink for StatsOnlySink {
    fn begin_scenario(&mut self, _scenario: &ScenarioInfo<'_>) {}

    fn end_scenario(&mut self, stats: Snapshot) {
        self.scenarios.push(stats);
    }

    fn begin_test(&mut self, _name: &str) {}
    fn end_test(&mut self) {}
    fn counting_error(&mut self, _message: &str) {}
}

#[test]
fn scenarios_release_everything_they_allocate() {
    const ITEMS_COUNT: usize = 100;
    const REPEAT_COUNT: usize = 2;

    let config = BatteryConfig::new(ITEMS_COUNT, REPEAT_COUNT);
    let mut sink = StatsOnlySink::new();

    run_battery(&config, &mut sink);

    assert_eq!(sink.scenarios.len(), 2, "one snapshot per scenario");

    let minimum_allocations = (ITEMS_COUNT * REPEAT_COUNT) as u64;
    for stats in &sink.scenarios {
        // At least one node allocation per inserted element, before even
        // counting the copies.
        assert!(stats.allocations() >= minimum_allocations);
        assert!(stats.bytes_allocated() > 0);

        // Lists and their copies all dropped inside the scenario, so the
        // window balances exactly.
        assert_eq!(stats.allocations(), stats.frees());
    }

    // The string scenario allocates element storage on top of node storage,
    // so it observes strictly more allocations than the integer scenario.
    let integer_stats = sink.scenarios.first().expect("integer scenario snapshot");
    let string_stats = sink.scenarios.last().expect("string scenario snapshot");
    assert!(string_stats.allocations() > integer_stats.allocations());
}
