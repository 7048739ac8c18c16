use std::sync::Arc;

use crate::item::metadata::{Metadata, Payload};
use crate::types::{Durability, EMPTY_ITEM_ID, ItemId, ItemType, MIN_DURABILITY};

/// Auxiliary capability state carried by a record (attached behaviours that
/// are not part of the key proper).
///
/// Two records with identical keys but incompatible capabilities are not
/// interchangeable.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    state: Option<Arc<Payload>>,
}

impl Capabilities {
    /// No capabilities attached.
    pub fn none() -> Self {
        Capabilities::default()
    }

    pub fn with_state(bytes: impl Into<Vec<u8>>) -> Self {
        Capabilities {
            state: Some(Arc::new(Payload::new(bytes))),
        }
    }

    pub fn is_none(&self) -> bool {
        self.state.is_none()
    }

    /// Compatible when both are bare, or both carry the same serialized state.
    pub fn compatible_with(&self, other: &Capabilities) -> bool {
        match (&self.state, &other.state) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

/// A stack of one item type: the record that item keys wrap.
#[derive(Debug, Clone)]
pub struct ItemRecord {
    item: ItemType,
    durability: Durability,
    count: u32,
    metadata: Metadata,
    capabilities: Capabilities,
}

impl ItemRecord {
    /// A single undamaged unit of `item` without metadata.
    pub fn new(item: ItemType) -> Self {
        ItemRecord {
            item,
            durability: MIN_DURABILITY,
            count: 1,
            metadata: Metadata::Absent,
            capabilities: Capabilities::none(),
        }
    }

    /// Negative durability is clamped to zero.
    pub fn with_durability(mut self, durability: Durability) -> Self {
        self.durability = durability.max(MIN_DURABILITY);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Copy of this record with durability and metadata overridden.
    /// Every other field, count included, is carried over.
    pub fn with_variant(&self, durability: Durability, metadata: Metadata) -> Self {
        ItemRecord {
            item: self.item,
            durability,
            count: self.count,
            metadata,
            capabilities: self.capabilities.clone(),
        }
    }

    pub fn item(&self) -> ItemType {
        self.item
    }

    pub fn item_id(&self) -> ItemId {
        self.item.id()
    }

    pub fn durability(&self) -> Durability {
        self.durability
    }

    pub fn max_durability(&self) -> Durability {
        self.item.max_durability()
    }

    pub fn is_damageable(&self) -> bool {
        self.item.is_damageable()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Empty means "no item": the reserved empty type or a zero count.
    pub fn is_empty(&self) -> bool {
        self.item.id() == EMPTY_ITEM_ID || self.count == 0
    }

    pub fn capabilities_compatible_with(&self, other: &ItemRecord) -> bool {
        self.capabilities.compatible_with(&other.capabilities)
    }
}
