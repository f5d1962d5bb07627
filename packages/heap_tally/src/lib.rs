//! Heap allocation counting for micro-benchmark harnesses.
//!
//! This package counts every dynamic memory allocation and deallocation in the
//! process during a measurement window, along with the total number of bytes
//! requested. The counters are process-wide because the point is to catch
//! *all* heap traffic during the window, including allocations performed
//! inside standard library containers, not only allocations the caller
//! explicitly marks.
//!
//! The core functionality includes:
//! - [`Allocator`] - A memory allocator wrapper that feeds the counters
//! - [`reset`] - Zeroes the counters before a measurement window
//! - [`snapshot`] - Captures the counters as a [`Snapshot`] value
//!
//! This package is not meant for use in production, serving only as a
//! development tool.
//!
//! # Usage
//!
//! ```
//! use heap_tally::Allocator;
//!
//! #[global_allocator]
//! static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();
//!
//! fn main() {
//!     heap_tally::reset();
//!
//!     let data = vec![1, 2, 3, 4, 5]; // This allocates memory.
//!     drop(data); // This frees it again.
//!
//!     let stats = heap_tally::snapshot();
//!     assert!(stats.allocations() >= 1);
//!     assert!(stats.bytes_allocated() >= 20);
//! }
//! ```
//!
//! # Thread safety
//!
//! The counters are atomic, so installing the allocator in a threaded program
//! is sound. The counts themselves are still process-wide: concurrent
//! measurement windows will observe each other's traffic. Measure one window
//! at a time.
//!
//! # Miri compatibility
//!
//! Miri replaces the global allocator with its own logic, so you cannot
//! execute code that uses this package under Miri.

mod allocator;
mod counters;

pub use allocator::Allocator;
pub use counters::{Snapshot, reset, snapshot};
