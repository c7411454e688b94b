#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Micro-benchmark comparing two message-schema designs for carrying a single
//! string payload: a flat record holding the string directly, versus a record
//! wrapping the string inside one nested sub-record.
//!
//! For the chosen shape, one run builds a batch of messages (payload = decimal
//! index), encodes every message into a reused buffer, and reports three raw
//! measurements with their per-message derivatives:
//!
//! - gross heap allocation during construction and encoding (via
//!   [`alloc_meter`])
//! - total encoded byte size
//! - wall-clock duration
//!
//! The audience is schema designers deciding whether an indirection layer (the
//! wrapper) is worth its allocation and size overhead.
//!
//! # Usage
//!
//! ```
//! use nest_cost::{Variant, measure};
//! use new_zealand::nz;
//!
//! let metrics = measure(Variant::Flat, nz!(100));
//! assert_eq!(metrics.message_count().get(), 100);
//! metrics.print_to_stdout();
//! ```
//!
//! Gross allocation figures are only meaningful when the metering allocator is
//! installed; see [`alloc_meter::Allocator`]. Without it, the allocation
//! columns of the report read zero while size and duration stay accurate.

mod batch;
mod harness;
mod metrics;
mod probe;
mod records;
mod variant;

pub use batch::build_batch;
pub use harness::measure;
pub use metrics::RunMetrics;
pub use probe::aggregate_encoded_size;
pub use records::{FlatRecord, PayloadData, PayloadRecord, WrappedRecord};
pub use variant::{UnknownVariantError, Variant};
