/// Numeric identifier of an item type (registry entry).
pub type ItemId = u32;

/// Wear/variant value of an item. Signed so that `max + 1` upper bounds
/// and the 16-bit ceiling fit without casts.
pub type Durability = i32;

/// Reserved id of the "nothing" item. Records of this type are empty.
pub const EMPTY_ITEM_ID: ItemId = 0;

/// Lowest durability a record can carry.
pub const MIN_DURABILITY: Durability = 0;

/// Highest durability a record can carry (16-bit signed max).
pub const MAX_DURABILITY: Durability = i16::MAX as Durability;

/// Static description of an item type.
///
/// Only damageable types have a meaningful `max_durability`; for every other
/// type the durability field is a plain variant number and fuzzy matching
/// does not narrow it.
///
/// Fields are private so `max_durability` always stays within
/// `[0, MAX_DURABILITY]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemType {
    id: ItemId,
    max_durability: Durability,
    damageable: bool,
}

impl ItemType {
    /// A type whose durability is a wear value in `[0, max_durability]`.
    pub fn damageable(id: ItemId, max_durability: Durability) -> Self {
        ItemType {
            id,
            max_durability: max_durability.clamp(MIN_DURABILITY, MAX_DURABILITY),
            damageable: true,
        }
    }

    /// A type without wear. Durability acts as a variant index.
    pub fn plain(id: ItemId) -> Self {
        ItemType {
            id,
            max_durability: 0,
            damageable: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn max_durability(&self) -> Durability {
        self.max_durability
    }

    pub fn is_damageable(&self) -> bool {
        self.damageable
    }
}
