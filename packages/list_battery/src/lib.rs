//! Timed operation battery over a doubly linked list.
//!
//! This package drives a fixed sequence of measured operations over
//! [`std::collections::LinkedList`]: fill, copy, two iteration styles and a
//! bulk predicate count, for two element types (small integer, short string).
//! It reports every measured region's boundaries to a pluggable [`Sink`] and
//! closes each scenario with the heap traffic observed by [`heap_tally`].
//!
//! The core functionality includes:
//! - [`BatteryConfig`] - Element count and repeat count for a run
//! - [`Element`] - The element-type variants exercised by the battery
//! - [`Sink`] - The reporting boundary the battery signals into
//! - [`run_scenario`] / [`run_battery`] - The scenario entry points
//!
//! This package is not meant for use in production, serving only as a
//! development tool.
//!
//! # Usage
//!
//! ```no_run
//! use heap_tally::Allocator;
//! use list_battery::{BatteryConfig, ConsoleSink, run_battery};
//!
//! #[global_allocator]
//! static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();
//!
//! fn main() {
//!     let config = BatteryConfig::new(100_000, 10);
//!     let mut sink = ConsoleSink::new();
//!
//!     run_battery(&config, &mut sink);
//! }
//! ```
//!
//! Timing of the measured regions is entirely the sink's responsibility; the
//! battery only signals where each region begins and ends. [`ConsoleSink`]
//! is the bundled wall-clock implementation.

mod config;
mod element;
mod scenario;
mod sink;

pub use config::BatteryConfig;
pub use element::Element;
pub use scenario::{run_battery, run_scenario};
pub use sink::{ConsoleSink, ScenarioInfo, Sink};
