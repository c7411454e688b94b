//! Allocation wrapper that meters gross heap allocation.

use std::alloc::{GlobalAlloc, Layout};
use std::fmt;
use std::sync::atomic::{self, AtomicU64};

/// Cumulative bytes requested from the allocator since process start.
/// Never decremented: deallocations release memory but do not reduce this.
static GROSS_BYTES_ALLOCATED: AtomicU64 = AtomicU64::new(0);

/// Adds one allocation request to the cumulative counter.
fn record_allocation(size: usize) {
    let size_u64: u64 = size.try_into().expect("usize always fits into u64");

    // Relaxed is sufficient: we only need atomicity, not ordering w.r.t. other memory ops.
    GROSS_BYTES_ALLOCATED.fetch_add(size_u64, atomic::Ordering::Relaxed);
}

/// Current value of the cumulative counter.
#[inline]
pub(crate) fn gross_bytes_total() -> u64 {
    GROSS_BYTES_ALLOCATED.load(atomic::Ordering::Relaxed)
}

// Test helper for unit tests where we do not hook the global allocator.
#[cfg(test)]
pub(crate) fn register_fake_allocation(bytes: u64) {
    GROSS_BYTES_ALLOCATED.fetch_add(bytes, atomic::Ordering::Relaxed);
}

/// A memory allocator that meters gross heap allocation.
///
/// This allocator wraps any [`GlobalAlloc`] implementation, adding the
/// requested size of every allocation to a process-wide cumulative counter
/// while maintaining the same allocation behavior as the underlying allocator.
/// Deallocations are forwarded but not counted; the counter reports gross
/// allocation, not net or peak.
///
/// # Examples
///
/// ```rust
/// use alloc_meter::Allocator;
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
    /// Creates a new metering allocator using the system's default allocator.
    ///
    /// This is a convenience method for the common case of wanting to meter
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
    /// Creates a new metering allocator wrapping the provided allocator.
    ///
    /// The resulting allocator has the same behavior characteristics as the
    /// underlying allocator, with the addition of gross allocation metering.
    #[must_use]
    #[inline]
    pub const fn new(allocator: A) -> Self {
        Self { inner: allocator }
    }
}

// SAFETY: We delegate all allocation operations to the underlying allocator,
// which already implements GlobalAlloc safely, while adding metering.
unsafe impl<A: GlobalAlloc> GlobalAlloc for Allocator<A> {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record_allocation(layout.size());

        // SAFETY: We forward the call to the underlying allocator which implements GlobalAlloc.
        unsafe { self.inner.alloc(layout) }
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // Not recorded: the counter is gross allocation only.

        // SAFETY: We forward the call to the underlying allocator which implements GlobalAlloc.
        unsafe { self.inner.dealloc(ptr, layout) }
    }

    #[inline]
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record_allocation(layout.size());

        // SAFETY: We forward the call to the underlying allocator which implements GlobalAlloc.
        unsafe { self.inner.alloc_zeroed(layout) }
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // The full new size counts as a fresh request; the old block's size
        // remains in the counter, consistent with gross accounting.
        record_allocation(new_size);

        // SAFETY: We forward the call to the underlying allocator which implements GlobalAlloc.
        unsafe { self.inner.realloc(ptr, layout, new_size) }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    // Static assertions for thread safety
    static_assertions::assert_impl_all!(Allocator<std::alloc::System>: Send, Sync);

    #[test]
    fn counter_accumulates_registered_allocations() {
        let before = gross_bytes_total();
        register_fake_allocation(128);
        let after = gross_bytes_total();

        // Other tests may register concurrently, so only a lower bound holds.
        assert!(after >= before.checked_add(128).expect("test totals stay tiny"));
    }

    #[test]
    fn counter_is_non_decreasing() {
        let first = gross_bytes_total();
        register_fake_allocation(1);
        let second = gross_bytes_total();

        assert!(second > first);
        assert!(gross_bytes_total() >= second);
    }
}
