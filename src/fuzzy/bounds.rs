use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::fuzzy::FuzzyMode;
use crate::item::key::check_single_unit;
use crate::item::{HIGH_SENTINEL, ItemKey, ItemRecord, LOW_SENTINEL, Metadata};
use crate::types::{Durability, MAX_DURABILITY, MIN_DURABILITY};

/// Lower and upper synthetic keys delimiting every record that fuzzily
/// matches a source record.
///
/// Callers scan an ordered container for keys `k` with `lower <= k <= upper`.
/// The bound keys carry sentinel metadata, so every real metadata value at
/// the boundary durabilities falls strictly inside the window:
///
/// ```text
/// (id, lo, LOW) < (id, lo, m1) < ... < (id, hi, m2) < (id, hi, HIGH)
/// ```
///
/// With `ignore_variant` the durability window spans the whole valid range
/// and the source metadata is copied instead of a sentinel.
#[derive(Debug, Clone)]
pub struct Bounds {
    lower: ItemKey,
    upper: ItemKey,
}

impl Bounds {
    /// # Errors
    /// `InvariantViolation` if the record is empty or not a single unit.
    pub fn new(record: &ItemRecord, mode: FuzzyMode, ignore_variant: bool) -> Result<Self> {
        if record.is_empty() {
            return Err(Error::invariant("item record must not be empty"));
        }
        check_single_unit(record)?;

        let (low, high) = durability_window(record, mode, ignore_variant);
        let (low_meta, high_meta) = if ignore_variant {
            (record.metadata().clone(), record.metadata().clone())
        } else {
            (LOW_SENTINEL, HIGH_SENTINEL)
        };

        tracing::debug!(
            item_id = record.item_id(),
            durability = record.durability(),
            %mode,
            ignore_variant,
            lower = low,
            upper = high,
            "computed fuzzy bounds"
        );

        Ok(Bounds {
            lower: make_bound(record, low, low_meta),
            upper: make_bound(record, high, high_meta),
        })
    }

    pub fn lower(&self) -> &ItemKey {
        &self.lower
    }

    pub fn upper(&self) -> &ItemKey {
        &self.upper
    }

    /// True when the lower key sorts after the upper key. Only happens for
    /// `Percent99` on an undamaged record, whose window `[1, 0]` is empty.
    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }

    /// Whether `key` lies inside `[lower, upper]`.
    ///
    /// # Errors
    /// `InvariantViolation` if `key` wraps a record that is not a single unit.
    pub fn contains(&self, key: &ItemKey) -> Result<bool> {
        Ok(self.lower.try_cmp(key)? != Ordering::Greater
            && key.try_cmp(&self.upper)? != Ordering::Greater)
    }
}

/// Inclusive (lower, upper) durability pair for the scan.
fn durability_window(
    record: &ItemRecord,
    mode: FuzzyMode,
    ignore_variant: bool,
) -> (Durability, Durability) {
    if ignore_variant || !record.is_damageable() {
        return (MIN_DURABILITY, MAX_DURABILITY);
    }

    let current = record.durability();
    let past_max = record.max_durability() + 1;

    match mode {
        FuzzyMode::IgnoreAll => (MIN_DURABILITY, past_max),
        FuzzyMode::Percent99 => {
            if current == MIN_DURABILITY {
                (1, MIN_DURABILITY)
            } else {
                (MIN_DURABILITY, past_max)
            }
        }
        FuzzyMode::Percentage(_) => {
            let breakpoint = mode
                .breakpoint(record.max_durability())
                .unwrap_or(MIN_DURABILITY);
            let low = if breakpoint <= current {
                breakpoint
            } else {
                MIN_DURABILITY
            };
            let high = if current < breakpoint {
                breakpoint - 1
            } else {
                past_max
            };
            (low, high)
        }
    }
}

fn make_bound(record: &ItemRecord, durability: Durability, metadata: Metadata) -> ItemKey {
    ItemKey::from(record.with_variant(durability, metadata))
}
