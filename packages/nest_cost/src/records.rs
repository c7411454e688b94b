//! The two message shapes under comparison.
//!
//! Both shapes carry one string payload on the protobuf wire format. The flat
//! shape stores it as a direct field; the wrapped shape stores it inside one
//! level of sub-message, which costs one tag byte plus one length byte per
//! message on the wire, plus whatever the indirection costs in allocations.
//! Messages are hand-derived rather than generated; there is no schema file.

use prost::Message;

/// Message shape holding the string payload as a direct field.
#[derive(Clone, PartialEq, Message)]
pub struct FlatRecord {
    /// The string payload.
    #[prost(string, tag = "1")]
    pub payload: String,
}

/// The sub-record of [`WrappedRecord`]; carries the same payload field as
/// [`FlatRecord`].
#[derive(Clone, PartialEq, Message)]
pub struct PayloadData {
    /// The string payload.
    #[prost(string, tag = "1")]
    pub payload: String,
}

/// Message shape holding the string payload inside one level of nested
/// sub-record.
#[derive(Clone, PartialEq, Message)]
pub struct WrappedRecord {
    /// The nested record carrying the payload. Absent until first written.
    #[prost(message, optional, tag = "1")]
    pub data: Option<PayloadData>,
}

/// The seam the harness uses to treat both shapes uniformly: write the
/// payload without knowing where the shape stores it, and read it back for
/// verification.
pub trait PayloadRecord: Message + Default {
    /// Stores the payload in the shape's payload field, materializing any
    /// intermediate record the shape requires.
    fn set_payload(&mut self, payload: String);

    /// The stored payload, or the empty string if none was ever stored.
    fn payload(&self) -> &str;
}

impl PayloadRecord for FlatRecord {
    fn set_payload(&mut self, payload: String) {
        self.payload = payload;
    }

    fn payload(&self) -> &str {
        &self.payload
    }
}

impl PayloadRecord for WrappedRecord {
    fn set_payload(&mut self, payload: String) {
        self.data.get_or_insert_default().payload = payload;
    }

    fn payload(&self) -> &str {
        self.data.as_ref().map_or("", |data| data.payload.as_str())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    // The shapes are thread-safe plain data.
    static_assertions::assert_impl_all!(FlatRecord: Send, Sync);
    static_assertions::assert_impl_all!(WrappedRecord: Send, Sync);

    #[test]
    fn flat_stores_payload_directly() {
        let mut record = FlatRecord::default();
        record.set_payload("42".to_string());

        assert_eq!(record.payload, "42");
        assert_eq!(record.payload(), "42");
    }

    #[test]
    fn wrapped_materializes_nested_record_on_first_write() {
        let mut record = WrappedRecord::default();
        assert!(record.data.is_none());

        record.set_payload("42".to_string());

        assert_eq!(
            record.data.as_ref().map(|data| data.payload.as_str()),
            Some("42")
        );
        assert_eq!(record.payload(), "42");
    }

    #[test]
    fn unwritten_records_read_as_empty_payload() {
        assert_eq!(FlatRecord::default().payload(), "");
        assert_eq!(WrappedRecord::default().payload(), "");
    }

    #[test]
    fn nesting_costs_two_bytes_on_the_wire() {
        let mut flat = FlatRecord::default();
        let mut wrapped = WrappedRecord::default();
        flat.set_payload("7".to_string());
        wrapped.set_payload("7".to_string());

        // Field tag + length prefix of the sub-message.
        assert_eq!(wrapped.encoded_len(), flat.encoded_len() + 2);
    }
}
