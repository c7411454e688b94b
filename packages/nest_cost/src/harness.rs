//! Run orchestration: build, encode, measure, report.

use std::num::NonZero;
use std::time::Instant;

use alloc_meter::AllocationMeter;

use crate::batch::build_batch;
use crate::metrics::RunMetrics;
use crate::probe::aggregate_encoded_size;
use crate::records::{FlatRecord, PayloadRecord, WrappedRecord};
use crate::variant::Variant;

/// Runs one measurement pass for the chosen shape.
///
/// Builds `message_count` messages whose payload is the decimal string of
/// their index, encodes each one into a reused buffer, and returns the
/// resulting [`RunMetrics`]. The allocation meter window opens before batch
/// construction and the clock stops after the last encode, so the reported
/// figures cover construction plus encoding and nothing else.
///
/// Single-threaded and linear: no retries, no recoverable failure states.
#[must_use]
pub fn measure(variant: Variant, message_count: NonZero<usize>) -> RunMetrics {
    let meter = AllocationMeter::new();
    let start = Instant::now();

    let serialized_bytes = match variant {
        Variant::Flat => measure_shape::<FlatRecord>(message_count),
        Variant::Wrapper => measure_shape::<WrappedRecord>(message_count),
    };

    let elapsed = start.elapsed();

    RunMetrics::new(
        message_count,
        meter.gross_bytes(),
        serialized_bytes,
        elapsed,
    )
}

fn measure_shape<T: PayloadRecord>(message_count: NonZero<usize>) -> u64 {
    let batch = build_batch::<T>(message_count, |record, index| {
        record.set_payload(index.to_string());
    });

    // One buffer for the whole batch; the probe clears it between messages.
    let mut buffer = Vec::new();
    aggregate_encoded_size(&batch, &mut buffer)
}
