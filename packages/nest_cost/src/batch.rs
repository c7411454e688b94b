//! Batch construction.

use std::num::NonZero;

/// Builds an ordered batch of `count` messages, applying `rule` exactly once
/// per message, in strictly increasing index order, on the calling thread.
///
/// Each message starts from `T::default()` and is handed to the rule together
/// with its index before the next message is created. There is no error path:
/// the rule is a pure in-place mutation.
#[must_use]
pub fn build_batch<T: Default>(count: NonZero<usize>, rule: impl Fn(&mut T, usize)) -> Vec<T> {
    let mut batch = Vec::with_capacity(count.get());

    for index in 0..count.get() {
        let mut message = T::default();
        rule(&mut message, index);
        batch.push(message);
    }

    batch
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;

    use new_zealand::nz;

    use super::*;

    #[test]
    fn batch_has_exactly_count_messages() {
        let batch: Vec<String> = build_batch(nz!(3), |message, index| {
            *message = index.to_string();
        });

        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn rule_is_applied_once_per_index_in_increasing_order() {
        let invocations: Cell<usize> = Cell::new(0);

        let batch: Vec<usize> = build_batch(nz!(100), |message, index| {
            // The rule must always see the index it is about to populate.
            assert_eq!(index, invocations.get());
            invocations.set(invocations.get() + 1);
            *message = index;
        });

        assert_eq!(invocations.get(), 100);
        assert!(batch.iter().enumerate().all(|(i, value)| *value == i));
    }

    #[test]
    fn single_message_batch_works() {
        let batch: Vec<u32> = build_batch(nz!(1), |message, _index| *message = 7);

        assert_eq!(batch, vec![7]);
    }
}
