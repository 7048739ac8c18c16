use crate::fuzzy::FuzzyMode;

/// Configuration for registry fuzzy scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Policy used by [`ItemRegistry::find_fuzzy`](crate::ItemRegistry::find_fuzzy).
    pub fuzzy_mode: FuzzyMode,
    /// Match on item type alone, ignoring durability and metadata.
    pub ignore_variant: bool,
}

impl Options {
    pub fn fuzzy_mode(mut self, mode: FuzzyMode) -> Self {
        self.fuzzy_mode = mode;
        self
    }

    pub fn ignore_variant(mut self, ignore: bool) -> Self {
        self.ignore_variant = ignore;
        self
    }
}
