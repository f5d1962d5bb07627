//! The process-wide counters and their read/reset surface.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Process-wide totals since the last `reset()`. Relaxed is sufficient
// everywhere: we only need atomicity, not ordering w.r.t. other memory ops.
pub(crate) static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);
pub(crate) static FREES: AtomicU64 = AtomicU64::new(0);
pub(crate) static BYTES_ALLOCATED: AtomicU64 = AtomicU64::new(0);

/// Records one allocation request of `size` bytes.
///
/// Called before the real allocation is attempted, so failed requests are
/// still counted.
pub(crate) fn track_allocation(size: usize) {
    let size: u64 = size.try_into().expect("usize always fits into u64");

    BYTES_ALLOCATED.fetch_add(size, Ordering::Relaxed);
    ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
}

/// Records one deallocation request.
pub(crate) fn track_free() {
    FREES.fetch_add(1, Ordering::Relaxed);
}

/// Resets all counters to zero.
///
/// Call this once before each measurement window, after any setup work whose
/// allocations you do not want counted. Resetting in the middle of a window
/// invalidates the window's totals.
pub fn reset() {
    ALLOCATIONS.store(0, Ordering::Relaxed);
    FREES.store(0, Ordering::Relaxed);
    BYTES_ALLOCATED.store(0, Ordering::Relaxed);
}

/// Captures the current value of all counters.
///
/// # Examples
///
/// ```
/// use heap_tally::Allocator;
///
/// #[global_allocator]
/// static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();
///
/// heap_tally::reset();
/// let boxed = Box::new(42_u64);
/// let stats = heap_tally::snapshot();
/// assert!(stats.allocations() >= 1);
/// assert!(stats.bytes_allocated() >= 8);
/// drop(boxed);
/// ```
#[must_use]
pub fn snapshot() -> Snapshot {
    Snapshot {
        allocations: ALLOCATIONS.load(Ordering::Relaxed),
        frees: FREES.load(Ordering::Relaxed),
        bytes_allocated: BYTES_ALLOCATED.load(Ordering::Relaxed),
    }
}

/// A point-in-time capture of the allocation counters.
///
/// Produced by [`snapshot()`]. The values are totals since the last
/// [`reset()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snapshot {
    allocations: u64,
    frees: u64,
    bytes_allocated: u64,
}

impl Snapshot {
    /// The number of allocation requests observed.
    #[must_use]
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// The number of deallocation requests observed.
    #[must_use]
    pub fn frees(&self) -> u64 {
        self.frees
    }

    /// The total number of bytes requested across all allocations.
    ///
    /// This counts requested sizes, not allocator-internal overhead, so it is
    /// at least the sum of the sizes of all allocations since the last reset.
    #[must_use]
    pub fn bytes_allocated(&self) -> u64 {
        self.bytes_allocated
    }
}

impl fmt::Display for Snapshot {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes in {} allocations, {} frees",
            self.bytes_allocated, self.allocations, self.frees
        )
    }
}
