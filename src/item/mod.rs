pub mod key;
pub mod metadata;
pub mod record;

pub use key::ItemKey;
pub use metadata::{HIGH_SENTINEL, LOW_SENTINEL, Metadata, Payload};
pub use record::{Capabilities, ItemRecord};
