use std::cmp::Ordering;
use std::sync::Arc;

use xxhash_rust::xxh3::xxh3_64;

/// Opaque metadata payload attached to an item record.
///
/// The crate never interprets the bytes. Keys order payloads by the identity
/// of their `Arc` allocation and only compare content for equality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Payload {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Metadata slot of a record.
///
/// The two sentinels are tags, not payloads: an empty real payload is never
/// mistaken for a sentinel even though neither carries content.
#[derive(Debug, Clone, Default)]
pub enum Metadata {
    /// The record has no metadata.
    #[default]
    Absent,
    /// Orders before every real payload of the same (type, durability).
    LowSentinel,
    /// Orders after every real payload of the same (type, durability).
    HighSentinel,
    /// Caller-supplied payload, shared by reference.
    Payload(Arc<Payload>),
}

/// Lower scan-bound marker.
pub const LOW_SENTINEL: Metadata = Metadata::LowSentinel;

/// Upper scan-bound marker.
pub const HIGH_SENTINEL: Metadata = Metadata::HighSentinel;

const ABSENT_HASH: u64 = 0;
const LOW_SENTINEL_HASH: u64 = 0x4c4f_575f_5441_4700; // "LOW_TAG\0"
const HIGH_SENTINEL_HASH: u64 = 0x4849_4748_5f54_4147; // "HIGH_TAG"

impl Metadata {
    /// Wrap bytes into a fresh payload with its own identity.
    pub fn payload(bytes: impl Into<Vec<u8>>) -> Self {
        Metadata::Payload(Arc::new(Payload::new(bytes)))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Metadata::Absent)
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Metadata::LowSentinel | Metadata::HighSentinel)
    }

    pub fn as_payload(&self) -> Option<&Payload> {
        match self {
            Metadata::Payload(p) => Some(p),
            _ => None,
        }
    }

    /// Same slot by identity: both absent, the same sentinel, or the same
    /// payload allocation.
    pub fn same_identity(&self, other: &Metadata) -> bool {
        match (self, other) {
            (Metadata::Absent, Metadata::Absent)
            | (Metadata::LowSentinel, Metadata::LowSentinel)
            | (Metadata::HighSentinel, Metadata::HighSentinel) => true,
            (Metadata::Payload(a), Metadata::Payload(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Bit-exact content equality. Sentinels only equal themselves.
    pub fn content_eq(&self, other: &Metadata) -> bool {
        match (self, other) {
            (Metadata::Payload(a), Metadata::Payload(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => self.same_identity(other),
        }
    }

    /// Hash of the content, consistent with [`Metadata::content_eq`].
    /// Absent metadata hashes to zero.
    pub fn content_hash(&self) -> u64 {
        match self {
            Metadata::Absent => ABSENT_HASH,
            Metadata::LowSentinel => LOW_SENTINEL_HASH,
            Metadata::HighSentinel => HIGH_SENTINEL_HASH,
            Metadata::Payload(p) => xxh3_64(p.as_bytes()),
        }
    }

    /// Identity rank among real metadata. Absent ranks lowest; payloads rank
    /// by allocation address, which is only stable within one process run.
    fn identity_rank(&self) -> usize {
        match self {
            Metadata::Payload(p) => Arc::as_ptr(p) as usize,
            _ => 0,
        }
    }

    /// Identity-based order used by item keys.
    pub fn cmp_identity(&self, other: &Metadata) -> Ordering {
        if self.same_identity(other) {
            return Ordering::Equal;
        }
        match (self, other) {
            (Metadata::LowSentinel, _) | (_, Metadata::HighSentinel) => Ordering::Less,
            (Metadata::HighSentinel, _) | (_, Metadata::LowSentinel) => Ordering::Greater,
            _ => self.identity_rank().cmp(&other.identity_rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_not_empty_payloads() {
        let empty = Metadata::payload(Vec::new());
        assert!(!LOW_SENTINEL.content_eq(&empty));
        assert!(!HIGH_SENTINEL.content_eq(&empty));
        assert!(!LOW_SENTINEL.content_eq(&HIGH_SENTINEL));
        assert!(!Metadata::Absent.content_eq(&empty));
    }

    #[test]
    fn test_distinct_payloads_with_same_bytes() {
        let a = Metadata::payload(b"ench".to_vec());
        let b = Metadata::payload(b"ench".to_vec());
        assert!(a.content_eq(&b));
        assert!(!a.same_identity(&b));
        assert_ne!(a.cmp_identity(&b), Ordering::Equal);
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn test_clone_keeps_identity() {
        let a = Metadata::payload(b"x".to_vec());
        let b = a.clone();
        assert!(a.same_identity(&b));
        assert_eq!(a.cmp_identity(&b), Ordering::Equal);
    }

    #[test]
    fn test_absent_orders_before_payload() {
        let p = Metadata::payload(b"x".to_vec());
        assert_eq!(Metadata::Absent.cmp_identity(&p), Ordering::Less);
        assert_eq!(p.cmp_identity(&Metadata::Absent), Ordering::Greater);
    }
}
