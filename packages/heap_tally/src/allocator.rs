//! Allocation wrapper that feeds the process-wide counters.

use std::alloc::{GlobalAlloc, Layout};
use std::fmt;

use crate::counters::{track_allocation, track_free};

/// A memory allocator that counts allocations and deallocations.
///
/// This allocator wraps any [`GlobalAlloc`] implementation to feed the
/// process-wide counters while maintaining the same allocation behavior and
/// performance characteristics as the underlying allocator.
///
/// Counting happens before the real allocation is attempted, so a request
/// that fails (a null return from the underlying allocator) is still counted.
/// Failure itself is reported the way [`GlobalAlloc`] reports it: a null
/// pointer that the standard library's allocation entry points turn into an
/// allocation error.
///
/// # Examples
///
/// ```rust
/// use heap_tally::Allocator;
///
/// #[global_allocator]
/// static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();
/// ```
pub struct Allocator<A: GlobalAlloc> {
    inner: A,
}

impl<A: GlobalAlloc> fmt::Debug for Allocator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Allocator")
            .field("inner", &"<allocator>")
            .finish()
    }
}

impl Allocator<std::alloc::System> {
    /// Creates a new counting allocator using the system's default allocator.
    ///
    /// This is a convenience method for the common case of wanting to count
    /// allocations without changing the underlying allocation strategy.
    #[must_use]
    #[inline]
    pub const fn system() -> Self {
        Self {
            inner: std::alloc::System,
        }
    }
}

impl<A: GlobalAlloc> Allocator<A> {
    /// Creates a new counting allocator wrapping the provided allocator.
    ///
    /// The resulting allocator will have the same performance and behavior
    /// characteristics as the underlying allocator, with the addition of
    /// allocation counting.
    #[must_use]
    #[inline]
    pub const fn new(allocator: A) -> Self {
        Self { inner: allocator }
    }
}

// SAFETY: We delegate all allocation operations to the underlying allocator,
// which already implements GlobalAlloc safely, while adding counting.
unsafe impl<A: GlobalAlloc> GlobalAlloc for Allocator<A> {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        track_allocation(layout.size());

        // SAFETY: We forward the call to the underlying allocator which implements GlobalAlloc.
        unsafe { self.inner.alloc(layout) }
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        track_free();

        // SAFETY: We forward the call to the underlying allocator which implements GlobalAlloc.
        unsafe { self.inner.dealloc(ptr, layout) }
    }

    #[inline]
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        track_allocation(layout.size());

        // SAFETY: We forward the call to the underlying allocator which implements GlobalAlloc.
        unsafe { self.inner.alloc_zeroed(layout) }
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // A resize is one new allocation plus one free of the old block, so a
        // program whose allocations all get released still balances out to
        // allocations == frees.
        track_allocation(new_size);
        track_free();

        // SAFETY: We forward the call to the underlying allocator which implements GlobalAlloc.
        unsafe { self.inner.realloc(ptr, layout, new_size) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Static assertions for thread safety.
    static_assertions::assert_impl_all!(Allocator<std::alloc::System>: Send, Sync);
}
