//! # Item Index
//!
//! Ordered keys for stackable item records, and the fuzzy range bounds used
//! to scan a sorted item registry for "close enough" matches.
//!
//! ## Core idea
//! An item is identified by (type, durability, metadata). Keys order on
//! those three fields so a sorted container groups every variant of a type
//! together. A fuzzy lookup then becomes a range scan: compute a synthetic
//! lower and upper key around the query, seek to the lower one and walk
//! forward until passing the upper one.
//!
//! Metadata is ordered by identity, not content, and two sentinel markers
//! sit below/above every real metadata value so that the bounds enclose all
//! variants at the boundary durabilities.

pub mod error;
pub mod fuzzy;
pub mod item;
pub mod iterator;
pub mod options;
pub mod registry;
pub mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use fuzzy::{Bounds, FuzzyMode};
pub use item::{Capabilities, HIGH_SENTINEL, ItemKey, ItemRecord, LOW_SENTINEL, Metadata, Payload};
pub use options::Options;
pub use registry::ItemRegistry;
pub use types::{Durability, ItemId, ItemType, MAX_DURABILITY, MIN_DURABILITY};
