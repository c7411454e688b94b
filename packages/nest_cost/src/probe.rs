//! Serialization probe: aggregate encoded size of a batch.

use prost::Message;

/// Encodes every message of `batch`, in order, into `buffer`, returning the
/// sum of the encoded byte lengths.
///
/// The buffer is logically cleared (length reset, capacity retained) before
/// every encode, so whether the encoder appends or overwrites cannot skew the
/// aggregate, and the buffer's backing storage settles at the largest message
/// size instead of growing per iteration. The caller owns the buffer and can
/// pre-size or reuse it across probes; it is never reallocated between
/// iterations once large enough.
///
/// Exactly one encode operation happens per message, sequentially.
pub fn aggregate_encoded_size<T: Message>(batch: &[T], buffer: &mut Vec<u8>) -> u64 {
    let mut total_bytes = 0_u64;

    for message in batch {
        buffer.clear();
        message
            .encode(buffer)
            .expect("encoding into a growable Vec cannot run out of capacity");

        let encoded_len: u64 = buffer.len().try_into().expect("usize always fits into u64");
        total_bytes = total_bytes.checked_add(encoded_len).expect(
            "aggregate encoded size overflows u64 - this indicates an unrealistic scenario",
        );
    }

    total_bytes
}
