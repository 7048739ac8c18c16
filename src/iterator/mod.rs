/// Positioned cursor over a sorted source.
///
/// Unlike `std::iter::Iterator`, the cursor can be re-positioned with `seek`,
/// which is what range scans need: seek to the lower bound, then step
/// forward until the key passes the upper bound.
pub trait StorageIterator {
    type Key;
    type Value;

    /// Returns the current key. Only valid when is_valid() is true.
    fn key(&self) -> &Self::Key;

    /// Returns the current value. Only valid when is_valid() is true.
    fn value(&self) -> &Self::Value;

    /// Returns true if the iterator is positioned at a valid entry.
    fn is_valid(&self) -> bool;

    /// Advances to the next entry.
    fn next(&mut self);

    /// Positions the iterator at the first entry with key >= target.
    fn seek(&mut self, key: &Self::Key);
}
