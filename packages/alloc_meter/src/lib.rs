#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Gross heap allocation metering for benchmark harnesses.
//!
//! This package counts the requested size of every heap allocation made by the
//! process, without ever subtracting deallocations. The resulting figure is
//! *gross* allocated bytes: how much memory was asked for in total, not how
//! much is held at any moment. That asymmetry is the point - for comparing the
//! allocation cost of two implementations of the same workload, the sum of
//! requests is the comparable quantity, while net or peak usage depends on
//! drop timing.
//!
//! The core functionality:
//! - [`Allocator`] - a memory allocator wrapper that records every allocation
//!   request into a process-wide cumulative counter
//! - [`AllocationMeter`] - reads the counter relative to a baseline captured
//!   at meter creation, so independent meters can observe overlapping windows
//!   without contaminating each other
//!
//! This package is not meant for use in production, serving only as a
//! development tool.
//!
//! # Usage
//!
//! ```
//! use alloc_meter::{AllocationMeter, Allocator};
//!
//! #[global_allocator]
//! static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();
//!
//! fn main() {
//!     let meter = AllocationMeter::new();
//!
//!     let _data = vec![0_u8; 1024]; // This allocates memory.
//!
//!     println!("gross allocated: {} bytes", meter.gross_bytes());
//! }
//! ```
//!
//! # Miri compatibility
//!
//! Miri replaces the global allocator with its own logic, so you cannot
//! execute code that uses this package under Miri.

mod allocator;
mod meter;

pub use allocator::Allocator;
pub use meter::AllocationMeter;
