//! Baseline-relative reads of the gross allocation counter.

use crate::allocator::gross_bytes_total;

/// Observes gross heap allocation from a baseline captured at creation.
///
/// The process-wide counter itself has no reset operation; a meter instead
/// snapshots the counter when constructed and reports the delta. This lets
/// each benchmark run (or each test) construct its own meter and read a
/// figure unaffected by whatever allocated before the meter existed.
///
/// The reported value is cumulative and monotonically non-decreasing over the
/// meter's lifetime: deallocations are never subtracted.
///
/// # Examples
///
/// ```
/// use alloc_meter::{AllocationMeter, Allocator};
///
/// #[global_allocator]
/// static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();
///
/// let meter = AllocationMeter::new();
/// let _data = String::from("example string allocation");
/// assert!(meter.gross_bytes() > 0);
/// ```
#[derive(Debug)]
#[must_use = "a meter only has value relative to its creation point"]
pub struct AllocationMeter {
    baseline_bytes: u64,
}

impl AllocationMeter {
    /// Creates a meter whose baseline is the counter value at this moment.
    ///
    /// Allocations made before this call do not contribute to
    /// [`gross_bytes()`](Self::gross_bytes).
    #[expect(
        clippy::new_without_default,
        reason = "a meter is defined by the moment it is created; a 'default meter' would hide that choice"
    )]
    pub fn new() -> Self {
        Self {
            baseline_bytes: gross_bytes_total(),
        }
    }

    /// Gross bytes requested from the allocator since this meter was created.
    ///
    /// Every call observes the counter at that moment; consecutive calls
    /// return non-decreasing values.
    #[must_use]
    pub fn gross_bytes(&self) -> u64 {
        gross_bytes_total()
            .checked_sub(self.baseline_bytes)
            .expect("gross allocation counter could not possibly decrease")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::allocator::register_fake_allocation;

    // The type is thread-safe.
    static_assertions::assert_impl_all!(AllocationMeter: Send, Sync);

    #[test]
    fn meter_observes_allocations_after_creation() {
        let meter = AllocationMeter::new();
        register_fake_allocation(256);

        assert!(meter.gross_bytes() >= 256);
    }

    #[test]
    fn gross_bytes_is_non_decreasing() {
        let meter = AllocationMeter::new();

        let first = meter.gross_bytes();
        register_fake_allocation(64);
        let second = meter.gross_bytes();

        assert!(second >= first);
    }

    #[test]
    fn independent_meters_have_independent_baselines() {
        let early = AllocationMeter::new();
        register_fake_allocation(512);
        let late = AllocationMeter::new();
        register_fake_allocation(32);

        // Read the late meter first: anything registered concurrently between
        // the two reads then only widens the early meter's figure.
        let late_bytes = late.gross_bytes();
        let early_bytes = early.gross_bytes();

        // The early meter sees both registrations, the late one only the second.
        assert!(early_bytes >= late_bytes.checked_add(512).expect("test totals stay tiny"));
    }
}
