pub mod skiplist;

use std::collections::HashMap;

use skiplist::SkipList;

use crate::error::{Error, Result};
use crate::fuzzy::{Bounds, FuzzyMode};
use crate::item::{ItemKey, ItemRecord};
use crate::iterator::StorageIterator;
use crate::options::Options;

/// In-memory registry of item amounts, keyed by [`ItemKey`].
///
/// Two structures back it:
///   - a hash map for exact lookups, which uses key equality (metadata
///     compared by content), so content-equal records aggregate;
///   - a skip list over the same keys for fuzzy range scans, which uses the
///     key order (metadata compared by identity).
///
/// Every key in the registry wraps a single-unit copy of the record that
/// was added, so comparisons never trip the unit-count invariant.
pub struct ItemRegistry {
    amounts: HashMap<ItemKey, u64>,
    index: SkipList<ItemKey, ()>,
    options: Options,
}

impl ItemRegistry {
    /// Create an empty registry with default options.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        ItemRegistry {
            amounts: HashMap::new(),
            index: SkipList::new(),
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Add `amount` units of `record`. The record's own count is ignored.
    pub fn add(&mut self, record: &ItemRecord, amount: u64) -> Result<()> {
        if record.is_empty() {
            return Err(Error::invariant("cannot add an empty item record"));
        }
        if record.metadata().is_sentinel() {
            return Err(Error::invariant(
                "sentinel metadata only marks scan bounds and cannot be stored",
            ));
        }
        let key = unit_key(record);
        tracing::trace!(item_id = key.item_id(), durability = key.durability(), amount, "add");

        if let Some(existing) = self.amounts.get_mut(&key) {
            *existing = existing.saturating_add(amount);
            return Ok(());
        }
        self.index.insert(key.clone(), ());
        self.amounts.insert(key, amount);
        Ok(())
    }

    /// Amount stored for exactly this record (type, durability, metadata
    /// content, capabilities). Zero when absent.
    pub fn amount(&self, record: &ItemRecord) -> u64 {
        if record.is_empty() {
            return 0;
        }
        self.amounts.get(&unit_key(record)).copied().unwrap_or(0)
    }

    /// Fuzzy lookup using the registry's configured options.
    pub fn find_fuzzy(&self, record: &ItemRecord) -> Result<Vec<(ItemKey, u64)>> {
        self.find_fuzzy_with(record, self.options.fuzzy_mode, self.options.ignore_variant)
    }

    /// Every stored key inside the fuzzy bounds of `record`, in key order.
    ///
    /// `Percent99` on an undamaged record produces an inverted window
    /// (`[1, 0]`), so that query always returns an empty result.
    pub fn find_fuzzy_with(
        &self,
        record: &ItemRecord,
        mode: FuzzyMode,
        ignore_variant: bool,
    ) -> Result<Vec<(ItemKey, u64)>> {
        if record.is_empty() {
            return Err(Error::invariant("cannot search for an empty item record"));
        }
        let query = record.clone().with_count(1);
        let bounds = Bounds::new(&query, mode, ignore_variant)?;

        let mut matches = Vec::new();
        let mut cursor = self.index.iter();
        cursor.seek(bounds.lower());
        while cursor.is_valid() && cursor.key() <= bounds.upper() {
            let key = cursor.key();
            let amount = self.amounts.get(key).copied().unwrap_or(0);
            matches.push((key.clone(), amount));
            cursor.next();
        }

        tracing::debug!(
            item_id = record.item_id(),
            %mode,
            ignore_variant,
            matched = matches.len(),
            "fuzzy scan"
        );
        Ok(matches)
    }

    /// All entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, u64)> + '_ {
        let mut cursor = self.index.iter();
        std::iter::from_fn(move || {
            let (key, _) = cursor.entry()?;
            cursor.next();
            Some((key, self.amounts.get(key).copied().unwrap_or(0)))
        })
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Sum of all stored amounts, saturating.
    pub fn total_amount(&self) -> u64 {
        self.amounts
            .values()
            .fold(0u64, |acc, amount| acc.saturating_add(*amount))
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn unit_key(record: &ItemRecord) -> ItemKey {
    ItemKey::from(record.clone().with_count(1))
}
