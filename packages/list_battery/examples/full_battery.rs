//! Example demonstrating a full battery run with console reporting.
//!
//! Installs the counting allocator, runs the integer and string scenarios and
//! prints per-test wall-clock timings plus the accumulated heap traffic.

use heap_tally::Allocator;
use list_battery::{BatteryConfig, ConsoleSink, run_battery};

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

fn main() {
    let config = BatteryConfig::new(100_000, 10);
    let mut sink = ConsoleSink::new();

    run_battery(&config, &mut sink);
}
