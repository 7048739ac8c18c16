use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use xxhash_rust::xxh3::xxh3_64;

use crate::error::{Error, Result};
use crate::fuzzy::{Bounds, FuzzyMode};
use crate::item::record::ItemRecord;
use crate::types::{Durability, ItemId};

/// Sort key for a single-unit item record.
///
/// Ordering: (item_id ASC, durability ASC, metadata by identity), with the
/// low/high sentinels pinned below/above every real metadata value. Records
/// whose capabilities are incompatible are then ordered by the address of the
/// wrapped record, which is only stable within a single process run.
///
/// The key keeps the record behind an `Arc`: cloning a key shares the record,
/// and two clones compare equal by identity before any field is looked at.
///
/// Counts are validated when keys are compared, not when they are built, so a
/// key may wrap a record that is not yet a single unit as long as nobody
/// compares it.
#[derive(Debug, Clone)]
pub struct ItemKey {
    record: Arc<ItemRecord>,
    item_id: ItemId,
    durability: Durability,
    hash: u64,
}

impl ItemKey {
    pub fn new(record: Arc<ItemRecord>) -> Self {
        let item_id = record.item_id();
        let durability = record.durability();
        let hash = Self::make_hash(item_id, durability, &record);
        ItemKey {
            record,
            item_id,
            durability,
            hash,
        }
    }

    /// The wrapped record.
    pub fn record(&self) -> &ItemRecord {
        &self.record
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn durability(&self) -> Durability {
        self.durability
    }

    /// Precomputed hash, consistent with [`ItemKey::try_eq`].
    pub fn hash_code(&self) -> u64 {
        self.hash
    }

    /// Fuzzy scan window around this key's record.
    pub fn bounds(&self, mode: FuzzyMode, ignore_variant: bool) -> Result<Bounds> {
        Bounds::new(&self.record, mode, ignore_variant)
    }

    /// Whether both records carry compatible capability state. When this is
    /// false and every key field matches, [`ItemKey::try_cmp`] falls back to
    /// record identity.
    pub fn capabilities_compatible(&self, other: &ItemKey) -> bool {
        self.record.capabilities_compatible_with(&other.record)
    }

    /// Key equality: same record, or same (type, durability, metadata
    /// content) with compatible capabilities.
    pub fn try_eq(&self, other: &ItemKey) -> Result<bool> {
        if Arc::ptr_eq(&self.record, &other.record) {
            return Ok(true);
        }
        check_single_unit(&self.record)?;
        check_single_unit(&other.record)?;

        Ok(self.item_id == other.item_id
            && self.durability == other.durability
            && self.record.metadata().content_eq(other.record.metadata())
            && self.capabilities_compatible(other))
    }

    /// Total order over keys. See the type docs for the tie-break sequence.
    pub fn try_cmp(&self, other: &ItemKey) -> Result<Ordering> {
        check_single_unit(&self.record)?;
        check_single_unit(&other.record)?;

        if Arc::ptr_eq(&self.record, &other.record) {
            return Ok(Ordering::Equal);
        }

        let ordering = self
            .item_id
            .cmp(&other.item_id)
            .then(self.durability.cmp(&other.durability))
            .then_with(|| {
                self.record
                    .metadata()
                    .cmp_identity(other.record.metadata())
            });
        if ordering != Ordering::Equal {
            return Ok(ordering);
        }

        if !self.capabilities_compatible(other) {
            return Ok(self.identity_rank().cmp(&other.identity_rank()));
        }
        Ok(Ordering::Equal)
    }

    fn identity_rank(&self) -> usize {
        Arc::as_ptr(&self.record) as usize
    }

    fn make_hash(item_id: ItemId, durability: Durability, record: &ItemRecord) -> u64 {
        let mut buf = [0u8; 16];
        buf[..4].copy_from_slice(&item_id.to_le_bytes());
        buf[4..8].copy_from_slice(&durability.to_le_bytes());
        buf[8..].copy_from_slice(&record.metadata().content_hash().to_le_bytes());
        xxh3_64(&buf)
    }
}

pub(crate) fn check_single_unit(record: &ItemRecord) -> Result<()> {
    if record.count() != 1 {
        return Err(Error::invariant(format!(
            "item record count has to be 1, got {}",
            record.count()
        )));
    }
    Ok(())
}

impl From<ItemRecord> for ItemKey {
    fn from(record: ItemRecord) -> Self {
        ItemKey::new(Arc::new(record))
    }
}

impl From<Arc<ItemRecord>> for ItemKey {
    fn from(record: Arc<ItemRecord>) -> Self {
        ItemKey::new(record)
    }
}

/// # Panics
/// Panics if either key wraps a record whose count is not 1.
impl PartialEq for ItemKey {
    fn eq(&self, other: &Self) -> bool {
        match self.try_eq(other) {
            Ok(eq) => eq,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Eq for ItemKey {}

impl Hash for ItemKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// # Panics
/// Panics if either key wraps a record whose count is not 1.
impl Ord for ItemKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.try_cmp(other) {
            Ok(ordering) => ordering,
            Err(e) => panic!("{e}"),
        }
    }
}

impl PartialOrd for ItemKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
