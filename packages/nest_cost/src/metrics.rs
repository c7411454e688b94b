//! Run measurements and the report derived from them.

use std::fmt;
use std::num::NonZero;
use std::time::Duration;

/// Read-only snapshot of one completed run's raw measurements, with derived
/// per-message metrics.
///
/// Computed once at the end of a run and never mutated afterwards. Allocation
/// is reported as *gross* bytes: the sum of all allocation request sizes
/// observed during the run, never reduced by deallocations.
#[derive(Clone, Debug)]
pub struct RunMetrics {
    message_count: NonZero<usize>,
    gross_allocated_bytes: u64,
    serialized_bytes: u64,
    elapsed: Duration,
}

impl RunMetrics {
    pub(crate) fn new(
        message_count: NonZero<usize>,
        gross_allocated_bytes: u64,
        serialized_bytes: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            message_count,
            gross_allocated_bytes,
            serialized_bytes,
            elapsed,
        }
    }

    /// Number of messages constructed and encoded in the run.
    #[must_use]
    pub fn message_count(&self) -> NonZero<usize> {
        self.message_count
    }

    /// Gross bytes requested from the allocator during the run.
    #[must_use]
    pub fn gross_allocated_bytes(&self) -> u64 {
        self.gross_allocated_bytes
    }

    /// Sum of the encoded byte lengths of all messages.
    #[must_use]
    pub fn serialized_bytes(&self) -> u64 {
        self.serialized_bytes
    }

    /// Wall-clock duration of construction plus encoding.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Gross allocated bytes divided by the message count.
    #[must_use]
    pub fn gross_allocated_bytes_per_message(&self) -> f64 {
        per_message(self.gross_allocated_bytes, self.message_count)
    }

    /// Serialized bytes divided by the message count.
    #[must_use]
    pub fn serialized_bytes_per_message(&self) -> f64 {
        per_message(self.serialized_bytes, self.message_count)
    }

    /// Elapsed milliseconds divided by the message count.
    #[expect(
        clippy::cast_precision_loss,
        reason = "per-message metrics are approximate by nature"
    )]
    #[must_use]
    pub fn elapsed_millis_per_message(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0 / self.message_count.get() as f64
    }

    /// Prints the report to stdout.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - covered via Display.
    pub fn print_to_stdout(&self) {
        print!("{self}");
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "per-message metrics are approximate by nature"
)]
fn per_message(total: u64, message_count: NonZero<usize>) -> f64 {
    total as f64 / message_count.get() as f64
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run size: {} messages", self.message_count)?;
        writeln!(f, "Gross allocated bytes: {}", self.gross_allocated_bytes)?;
        writeln!(
            f,
            "Gross allocated bytes per message: {}",
            self.gross_allocated_bytes_per_message()
        )?;
        writeln!(f, "Serialized size: {}", self.serialized_bytes)?;
        writeln!(
            f,
            "Serialized size per message: {}",
            self.serialized_bytes_per_message()
        )?;
        writeln!(f, "Test duration: {} ms", self.elapsed.as_millis())?;
        writeln!(
            f,
            "Test duration per message: {} ms",
            self.elapsed_millis_per_message()
        )
    }
}
