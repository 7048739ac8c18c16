use std::cmp::Ordering;
use std::mem;

use rand::Rng;

use crate::iterator::StorageIterator;

/// Maximum height of the skip list. LevelDB uses 12.
pub const MAX_HEIGHT: usize = 12;

/// A single node in the skip list.
///
/// Each node has `height` forward pointers, stored as indices into the
/// list's node arena. Level 0 links every node in key order; higher levels
/// skip over nodes, enabling O(log n) average-case search.
///
/// ```text
/// Level 3:  HEAD ──────────────────────────────► 50 ──────────► NIL
/// Level 2:  HEAD ──────────► 20 ────────────────► 50 ──────────► NIL
/// Level 1:  HEAD ──► 10 ──► 20 ────► 35 ────────► 50 ──► 60 ──► NIL
/// Level 0:  HEAD ──► 10 ──► 20 ──► 25 ──► 35 ──► 50 ──► 60 ──► 70 ► NIL
/// ```
struct SkipNode<K, V> {
    key: K,
    value: V,
    forward: Vec<Option<usize>>,
}

/// A probabilistic sorted map ordered by `K: Ord`.
///
/// Nodes live in an arena (`Vec`) and link by index, so there is no unsafe
/// code and no per-node boxing. Entries are never removed.
///
/// Keys are matched with `Ord::cmp`, never with `PartialEq`: two keys that
/// compare `Equal` are the same entry even if `==` disagrees.
///
/// Average case: O(log n) insert, O(log n) lookup, O(n) iteration.
pub struct SkipList<K, V> {
    head: [Option<usize>; MAX_HEIGHT],
    nodes: Vec<SkipNode<K, V>>,
    height: usize,
}

impl<K: Ord, V> SkipList<K, V> {
    /// Create a new empty skip list.
    pub fn new() -> Self {
        SkipList {
            head: [None; MAX_HEIGHT],
            nodes: Vec::new(),
            height: 1,
        }
    }

    /// Insert a key-value pair. If an order-equal key exists, its value is
    /// replaced and the old value returned; the stored key is kept.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut prev = [None; MAX_HEIGHT];
        if let Some(idx) = self.find_greater_or_equal(&key, &mut prev) {
            if self.nodes[idx].key.cmp(&key) == Ordering::Equal {
                return Some(mem::replace(&mut self.nodes[idx].value, value));
            }
        }

        let height = self.random_height();
        if height > self.height {
            // prev[level] is already None (head) for the new levels.
            self.height = height;
        }

        let idx = self.nodes.len();
        let forward: Vec<Option<usize>> = (0..height)
            .map(|level| self.next_of(prev[level], level))
            .collect();
        self.nodes.push(SkipNode {
            key,
            value,
            forward,
        });
        for (level, p) in prev.iter().enumerate().take(height) {
            self.set_next(*p, level, Some(idx));
        }
        None
    }

    /// Look up a key. Returns the value if found.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.find_equal(key)?;
        Some(&self.nodes[idx].value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find_equal(key)?;
        Some(&mut self.nodes[idx].value)
    }

    /// Number of entries in the skip list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the skip list is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create an iterator over all entries in sorted order.
    pub fn iter(&self) -> SkipListIterator<'_, K, V> {
        SkipListIterator {
            list: self,
            current: self.head[0],
        }
    }

    fn find_equal(&self, key: &K) -> Option<usize> {
        let mut prev = [None; MAX_HEIGHT];
        self.find_greater_or_equal(key, &mut prev)
            .filter(|idx| self.nodes[*idx].key.cmp(key) == Ordering::Equal)
    }

    /// Walk down from the highest level, recording the last node before
    /// `key` on every level. Returns the first node with key >= `key`.
    fn find_greater_or_equal(
        &self,
        key: &K,
        prev: &mut [Option<usize>; MAX_HEIGHT],
    ) -> Option<usize> {
        let mut x: Option<usize> = None;
        for level in (0..self.height).rev() {
            while let Some(next) = self.next_of(x, level) {
                if self.nodes[next].key < *key {
                    x = Some(next);
                } else {
                    break;
                }
            }
            prev[level] = x;
        }
        self.next_of(x, 0)
    }

    /// `None` stands for the head sentinel.
    fn next_of(&self, node: Option<usize>, level: usize) -> Option<usize> {
        match node {
            None => self.head[level],
            Some(idx) => self.nodes[idx].forward[level],
        }
    }

    fn set_next(&mut self, node: Option<usize>, level: usize, to: Option<usize>) {
        match node {
            None => self.head[level] = to,
            Some(idx) => self.nodes[idx].forward[level] = to,
        }
    }

    /// Each extra level has a 1/4 probability (LevelDB's branching factor).
    fn random_height(&self) -> usize {
        let mut rng = rand::thread_rng();
        let mut height = 1;
        while height < MAX_HEIGHT && rng.gen_ratio(1, 4) {
            height += 1;
        }
        height
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over skip list entries in sorted order.
///
/// Follows level 0 forward pointers; `seek` uses the upper levels.
pub struct SkipListIterator<'a, K, V> {
    list: &'a SkipList<K, V>,
    current: Option<usize>,
}

impl<'a, K, V> SkipListIterator<'a, K, V> {
    /// Current entry, borrowed for the lifetime of the list rather than the
    /// cursor. `None` once exhausted.
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        let list: &'a SkipList<K, V> = self.list;
        self.current.map(|idx| {
            let node = &list.nodes[idx];
            (&node.key, &node.value)
        })
    }
}

impl<'a, K: Ord, V> StorageIterator for SkipListIterator<'a, K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        match self.current {
            Some(idx) => &self.list.nodes[idx].key,
            None => panic!("key() called on an exhausted skip list iterator"),
        }
    }

    fn value(&self) -> &V {
        match self.current {
            Some(idx) => &self.list.nodes[idx].value,
            None => panic!("value() called on an exhausted skip list iterator"),
        }
    }

    fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    fn next(&mut self) {
        if let Some(idx) = self.current {
            self.current = self.list.nodes[idx].forward[0];
        }
    }

    fn seek(&mut self, key: &K) {
        let mut prev = [None; MAX_HEIGHT];
        self.current = self.list.find_greater_or_equal(key, &mut prev);
    }
}
